//! Context-specialized code generation for dynamic expressions.
//!
//! Lowers Quill expression trees (PHP semantics) into Java-style target
//! source. The same node produces different text depending on what the
//! surrounding code needs from it:
//!
//! | Context | Target type | Example for `-x` |
//! |---|---|---|
//! | [`EmitContext::Value`] | boxed `Value` | `env.getValue("x").neg()` |
//! | [`EmitContext::Boolean`] | native `boolean` | `env.getValue("x").neg().toBoolean()` |
//! | [`EmitContext::Long`] | native `long` | `(-5L)` (numeric operands only) |
//! | [`EmitContext::Double`] | native `double` | `(-3.5)` (numeric operands only) |
//! | [`EmitContext::SelfExpr`] | node constructor | `new UnaryMinusExpr(new VarExpr("x"))` |
//!
//! # Architecture
//!
//! ```text
//! ExprArena + ExprId
//!        ↓
//!   Registry::resolve   (NodeKind → GeneratorFactory)
//!        ↓
//!   Box<dyn Generator>  (bound to its node, resolves operands on demand)
//!        ↓
//!   Emitter             (append-only io::Write sink with indentation)
//! ```
//!
//! Coercion rules are never evaluated here. Loose equality is always
//! emitted as a call to the value layer's `eql`, and boxed negation as
//! `neg`, so the generated program inherits their semantics exactly.
//!
//! # Tracing
//!
//! - `RUST_LOG=quill_codegen=debug`: one event per top-level generation.
//! - `RUST_LOG=quill_codegen=trace`: every node emission and resolution.

mod context;
mod emitter;
mod error;
mod fold;
mod generator;
mod generators;
mod registry;
pub mod target;

pub use context::{Contexts, EmitContext};
pub use emitter::{emit_to_string, Emitter};
pub use error::{EmitError, EmitResult};
pub use fold::{Folded, NativeNumber};
pub use generator::{Bound, Generator};
pub use registry::{GeneratorFactory, Registry};

use quill_ir::{ExprArena, ExprId};

/// Generate the target expression for `id` in the requested context.
///
/// Resolves the node's generator through `registry` and renders the
/// emission into a fresh string.
#[tracing::instrument(level = "debug", skip(registry, arena), fields(kind = %arena.node(id).kind()))]
pub fn generate(
    registry: &Registry,
    arena: &ExprArena,
    id: ExprId,
    context: EmitContext,
) -> EmitResult<String> {
    let generator = registry.resolve(arena, id)?;
    emit_to_string(|out| generator.emit(context, out))
}
