//! Source locations.
//!
//! A location is a file id plus a 1-based line. It is copied by value into
//! every node and never influences what code gets generated.

use std::fmt;

/// Identifier of a source file within a compilation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FileId(u32);

impl FileId {
    /// Create a new file id.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        FileId(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

/// Source coordinate of a node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Location {
    pub file: FileId,
    pub line: u32,
}

impl Location {
    /// Location for synthesized nodes (line 0 never occurs in source).
    pub const DUMMY: Location = Location {
        file: FileId(0),
        line: 0,
    };

    #[inline]
    pub const fn new(file: FileId, line: u32) -> Self {
        Location { file, line }
    }

    /// Whether this location was synthesized rather than read from source.
    #[inline]
    pub const fn is_dummy(self) -> bool {
        self.line == 0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dummy() {
            write!(f, "<generated>")
        } else {
            write!(f, "{}:{}", self.file, self.line)
        }
    }
}
