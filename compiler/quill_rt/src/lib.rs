//! Dynamic value layer for Quill generated code.
//!
//! Generated target code never decides coercion rules itself: every loose
//! comparison goes through [`eql`] and every boxed negation through [`neg`].
//! This crate is the reference implementation of those primitives, following
//! PHP 8 semantics:
//!
//! - `5 == "5"` is true, `0 == "abc"` is false (a number only equals a string
//!   numerically when the string is numeric).
//! - Integer arithmetic that leaves the `i64` range is promoted to `f64`
//!   instead of wrapping, so negating `i64::MIN` yields the float `2^63`.
//!
//! [`Env`] is the per-request variable store that generated code reads and
//! writes through `env.getValue` / `env.setValue`.

mod env;
mod numeric;
mod operators;
mod value;

pub use env::{Access, Env};
pub use numeric::{parse_numeric, parse_numeric_prefix, Number};
pub use operators::{add, eql, neg, sub};
pub use value::Value;

#[cfg(test)]
mod tests;
