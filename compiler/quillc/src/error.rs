//! Driver errors.

use std::io;

use quill_codegen::EmitError;
use quill_ir::{ExprId, NodeKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    /// Generating one method failed; the whole unit is abandoned.
    #[error("in function `{function}`: {source}")]
    Emit {
        function: String,
        #[source]
        source: EmitError,
    },

    #[error("registry has no generator for: {}", format_kinds(.missing))]
    IncompleteRegistry { missing: Vec<NodeKind> },

    #[error("`{name}` is not a valid {what} name")]
    InvalidName { name: String, what: &'static str },

    #[error("function `{0}` is defined more than once")]
    DuplicateFunction(String),

    #[error("function `{function}` has root {root:?}, which is not in the unit's arena")]
    UnknownRoot { function: String, root: ExprId },

    #[error("failed to write compilation unit: {0}")]
    Sink(#[from] io::Error),
}

impl CompileError {
    pub(crate) fn emit(function: &str, source: EmitError) -> Self {
        CompileError::Emit {
            function: function.to_string(),
            source,
        }
    }
}

fn format_kinds(kinds: &[NodeKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}
