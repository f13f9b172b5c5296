//! Target execution errors.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("unrecognized input at offset {offset}: {text:?}")]
    Lex { offset: usize, text: String },

    #[error("expected {expected} at offset {offset}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("unknown name `{0}`")]
    UnknownName(String),

    #[error("unknown class `{0}`")]
    UnknownClass(String),

    #[error("no method `{method}` on {receiver}")]
    UnknownMethod { receiver: String, method: String },

    #[error("`{operation}` takes {expected} argument(s), found {found}")]
    Arity {
        operation: String,
        expected: usize,
        found: usize,
    },

    #[error("`{operation}` expects {expected}, found {found}")]
    TypeMismatch {
        operation: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub type ExecResult<T> = Result<T, ExecError>;
