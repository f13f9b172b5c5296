//! Expression IR for the Quill code generator.
//!
//! The parser that produces these trees lives outside this workspace. What
//! this crate provides is the immutable, flat representation the generators
//! read from:
//!
//! - [`ExprArena`] owns every node of a compilation unit. Operands are pushed
//!   before their parents, so trees are acyclic by construction.
//! - [`ExprRef`] is a borrowed view of one node exposing `operand(i)`,
//!   `location()` and `kind()`.
//! - [`Location`] tags every node with a file id and line. It only ever feeds
//!   diagnostics.
//! - [`NodeKind`] is the discriminant the generator registry dispatches on.

mod arena;
mod ast;
mod expr_id;
mod location;
mod name;

pub use arena::{Expr, ExprArena, ExprRef};
pub use ast::{BinaryOp, ExprKind, Literal, NodeKind, UnaryOp};
pub use expr_id::ExprId;
pub use location::{FileId, Location};
pub use name::{Name, StringInterner};
