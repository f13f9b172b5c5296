//! Executor for generated target text.
//!
//! Understands the Java expression subset the code generator emits:
//! literals (`5L`, `3.5`, `"s"`, `true`), the runtime classes (`env`,
//! `NullValue`, `BooleanValue`, `LongValue`, `DoubleValue`, `Long`,
//! `Double`), value methods, native `-`, `+`, `!` and `(double)`/`(long)`
//! casts, and the node constructors used by self-reconstruction.
//!
//! Evaluation follows Java: receiver before arguments, arguments left to
//! right, `long` arithmetic wraps, mixed arithmetic promotes to `double`.

mod lexer;
mod machine;
mod parser;

use std::fmt;

use quill_ir::{ExprArena, ExprId};
use quill_rt::{Env, Value};

use crate::{ExecError, ExecResult};

/// Result of executing a target expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Native {
    /// A boxed `Value`.
    Value(Value),
    Bool(bool),
    Long(i64),
    Double(f64),
    /// A `String` (only ever an argument).
    Str(String),
    /// A node constructed at runtime, allocated in the output arena.
    Node(ExprId),
}

impl Native {
    pub fn type_name(&self) -> &'static str {
        match self {
            Native::Value(_) => "Value",
            Native::Bool(_) => "boolean",
            Native::Long(_) => "long",
            Native::Double(_) => "double",
            Native::Str(_) => "String",
            Native::Node(_) => "Expr",
        }
    }

    fn mismatch(&self, operation: &str, expected: &'static str) -> ExecError {
        ExecError::TypeMismatch {
            operation: operation.to_string(),
            expected,
            found: self.type_name(),
        }
    }

    pub(crate) fn into_value(self, operation: &str) -> ExecResult<Value> {
        match self {
            Native::Value(v) => Ok(v),
            other => Err(other.mismatch(operation, "Value")),
        }
    }

    pub(crate) fn into_bool(self, operation: &str) -> ExecResult<bool> {
        match self {
            Native::Bool(b) => Ok(b),
            other => Err(other.mismatch(operation, "boolean")),
        }
    }

    pub(crate) fn into_long(self, operation: &str) -> ExecResult<i64> {
        match self {
            Native::Long(n) => Ok(n),
            other => Err(other.mismatch(operation, "long")),
        }
    }

    pub(crate) fn into_double(self, operation: &str) -> ExecResult<f64> {
        match self {
            Native::Double(d) => Ok(d),
            other => Err(other.mismatch(operation, "double")),
        }
    }

    pub(crate) fn into_str(self, operation: &str) -> ExecResult<String> {
        match self {
            Native::Str(s) => Ok(s),
            other => Err(other.mismatch(operation, "String")),
        }
    }

    pub(crate) fn into_node(self, operation: &str) -> ExecResult<ExprId> {
        match self {
            Native::Node(id) => Ok(id),
            other => Err(other.mismatch(operation, "Expr")),
        }
    }
}

impl fmt::Display for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Native::Value(v) => write!(f, "Value({v})"),
            Native::Bool(b) => write!(f, "{b}"),
            Native::Long(n) => write!(f, "{n}L"),
            Native::Double(d) => write!(f, "{d:?}"),
            Native::Str(s) => write!(f, "{s:?}"),
            Native::Node(id) => write!(f, "Expr({id:?})"),
        }
    }
}

/// Parse and run one target expression.
///
/// Variable accesses go through `env` (and appear in its access trace);
/// nodes built by `new ...Expr(..)` are allocated in `nodes`.
#[tracing::instrument(level = "debug", skip(env, nodes))]
pub fn execute(source: &str, env: &mut Env, nodes: &mut ExprArena) -> ExecResult<Native> {
    let term = parser::parse(source)?;
    machine::Machine::new(env, nodes).eval(&term)
}
