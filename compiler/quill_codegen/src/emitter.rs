//! Structured text sink.
//!
//! The `Emitter` is the only thing generators write to. It forwards text to
//! an `io::Write` and tracks nesting so callers can lay out blocks of
//! generated statements; expression generators only ever `print`.

use std::io::{self, Write};

use crate::{EmitError, EmitResult};

const INDENT: &[u8] = b"    ";

/// Append-only writer with indentation tracking.
///
/// Indentation is written lazily, before the first text of each line, so
/// blank lines stay empty.
pub struct Emitter<'w> {
    sink: &'w mut dyn Write,
    indent: usize,
    at_line_start: bool,
}

impl<'w> Emitter<'w> {
    pub fn new(sink: &'w mut dyn Write) -> Self {
        Self::with_indent(sink, 0)
    }

    /// Start at a given nesting depth (used for per-worker buffers whose
    /// text is spliced into an enclosing block).
    pub fn with_indent(sink: &'w mut dyn Write, indent: usize) -> Self {
        Emitter {
            sink,
            indent,
            at_line_start: true,
        }
    }

    /// Write text. Embedded newlines start new, indented lines.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.sink.write_all(b"\n")?;
                self.at_line_start = true;
            }
            if line.is_empty() {
                continue;
            }
            if self.at_line_start {
                for _ in 0..self.indent {
                    self.sink.write_all(INDENT)?;
                }
                self.at_line_start = false;
            }
            self.sink.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Write text followed by a newline.
    pub fn println(&mut self, text: &str) -> io::Result<()> {
        self.print(text)?;
        self.newline()
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.sink.write_all(b"\n")?;
        self.at_line_start = true;
        Ok(())
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Run `f` one level deeper, restoring the depth afterwards even if
    /// `f` fails.
    pub fn scope<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        self.indent();
        let result = f(self);
        self.dedent();
        result
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.indent
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

/// Render one emission into a string.
pub fn emit_to_string(f: impl FnOnce(&mut Emitter<'_>) -> EmitResult) -> EmitResult<String> {
    let mut buf = Vec::new();
    f(&mut Emitter::new(&mut buf))?;
    String::from_utf8(buf).map_err(|e| EmitError::Sink(io::Error::new(io::ErrorKind::InvalidData, e)))
}
