//! The per-node emission contract.

use quill_ir::{ExprRef, Location, Name, NodeKind};
use quill_stack::ensure_sufficient_stack;

use crate::{Contexts, EmitContext, EmitError, EmitResult, Emitter, Folded, Registry};

/// Emission strategy bound to one node.
///
/// A generator borrows its node (and through it the arena), so it can never
/// outlive the tree it renders. Operand generators are not stored; they are
/// resolved through the [`Registry`] each time they are needed.
///
/// Implementors provide `emit_value` and `emit_self`. The boolean form
/// defaults to a call-through on the boxed value; the native numeric forms
/// default to failing with [`EmitError::Unsupported`].
pub trait Generator {
    /// The node this generator renders.
    fn node(&self) -> ExprRef<'_>;

    fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    fn location(&self) -> Location {
        self.node().location()
    }

    /// Contexts this generator can serve.
    ///
    /// Composite generators derive this from their operands, so it can fail
    /// with the same errors as resolving them.
    fn contexts(&self) -> EmitResult<Contexts> {
        Ok(Contexts::BOXED)
    }

    /// Expression of type `Value`.
    fn emit_value(&self, out: &mut Emitter<'_>) -> EmitResult;

    /// Expression of native type `boolean`.
    fn emit_boolean(&self, out: &mut Emitter<'_>) -> EmitResult {
        self.emit_value(out)?;
        out.print(".toBoolean()")?;
        Ok(())
    }

    /// Expression of native type `long`.
    ///
    /// Only requested where the surrounding code has proven the operand is
    /// an integer.
    fn emit_long(&self, _out: &mut Emitter<'_>) -> EmitResult {
        Err(self.unsupported(EmitContext::Long))
    }

    /// Expression of native type `double`.
    fn emit_double(&self, _out: &mut Emitter<'_>) -> EmitResult {
        Err(self.unsupported(EmitContext::Double))
    }

    /// Native `long` or `double` form, together with its compile-time
    /// result when the node is constant.
    ///
    /// Composite numeric generators call this on their operands so that a
    /// constant chain is folded once, bottom-up, while it is emitted. The
    /// default emits through `emit_long`/`emit_double` and folds nothing,
    /// which is what a generator reading runtime state should report.
    fn emit_native(&self, context: EmitContext, out: &mut Emitter<'_>) -> EmitResult<Option<Folded>> {
        match context {
            EmitContext::Long => self.emit_long(out)?,
            EmitContext::Double => self.emit_double(out)?,
            other => return Err(self.unsupported(other)),
        }
        Ok(None)
    }

    /// Expression that constructs an equivalent node at runtime.
    fn emit_self(&self, out: &mut Emitter<'_>) -> EmitResult;

    /// Emit in the given context.
    fn emit(&self, context: EmitContext, out: &mut Emitter<'_>) -> EmitResult {
        ensure_sufficient_stack(|| {
            tracing::trace!(id = ?self.node().id(), kind = %self.kind(), %context, "emit");
            match context {
                EmitContext::Value => self.emit_value(out),
                EmitContext::Boolean => self.emit_boolean(out),
                EmitContext::Long => self.emit_long(out),
                EmitContext::Double => self.emit_double(out),
                EmitContext::SelfExpr => self.emit_self(out),
            }
        })
    }

    fn unsupported(&self, context: EmitContext) -> EmitError {
        EmitError::Unsupported {
            kind: self.kind(),
            context,
            location: self.location(),
        }
    }
}

/// A node together with the registry its operands are resolved through.
///
/// This is what a [`GeneratorFactory`](crate::GeneratorFactory) receives.
#[derive(Copy, Clone)]
pub struct Bound<'a> {
    registry: &'a Registry,
    node: ExprRef<'a>,
}

impl<'a> Bound<'a> {
    pub(crate) fn new(registry: &'a Registry, node: ExprRef<'a>) -> Self {
        Bound { registry, node }
    }

    #[inline]
    pub fn node(self) -> ExprRef<'a> {
        self.node
    }

    #[inline]
    pub fn registry(self) -> &'a Registry {
        self.registry
    }

    /// Resolve the generator of the `index`-th operand.
    pub fn operand(self, index: usize) -> EmitResult<Box<dyn Generator + 'a>> {
        let Some(child) = self.node.operand(index) else {
            return Err(self.shape_mismatch());
        };
        self.registry.resolve_node(child)
    }

    #[inline]
    pub fn resolve(self, name: Name) -> &'a str {
        self.node.resolve(name)
    }

    /// Error for a node whose payload or operands do not fit its generator.
    pub fn shape_mismatch(self) -> EmitError {
        EmitError::ShapeMismatch {
            kind: self.node.kind(),
            location: self.node.location(),
        }
    }
}
