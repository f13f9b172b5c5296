//! Execution harness for generated Quill code.
//!
//! Two independent ways to evaluate an expression tree:
//!
//! - [`Interpreter`] walks the tree directly, calling the value layer
//!   primitives the way the source language defines each node.
//! - [`execute`] runs the *target text* produced by the code generator: a
//!   small Java-expression evaluator (logos lexer, recursive-descent parser)
//!   that understands exactly the surface the generators emit.
//!
//! Comparing the two is how generated code is checked against the source
//! semantics without a Java toolchain.

mod error;
mod interpreter;
mod target;

pub use error::{ExecError, ExecResult};
pub use interpreter::Interpreter;
pub use target::{execute, Native};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
