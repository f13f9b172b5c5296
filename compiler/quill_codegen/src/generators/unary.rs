//! Negation and logical not.

use quill_ir::{ExprRef, NodeKind};

use super::{agreeing, native_contexts, native_operand};
use crate::{Bound, Contexts, EmitContext, EmitResult, Emitter, Folded, Generator};

pub(super) struct MinusGen<'a> {
    pub(super) bound: Bound<'a>,
}

impl Generator for MinusGen<'_> {
    fn node(&self) -> ExprRef<'_> {
        self.bound.node()
    }

    /// Native forms exist when the operand has one and negating it in
    /// native arithmetic gives what `neg` gives.
    fn contexts(&self) -> EmitResult<Contexts> {
        native_contexts(self)
    }

    fn emit_value(&self, out: &mut Emitter<'_>) -> EmitResult {
        let operand = self.bound.operand(0)?;
        operand.emit(EmitContext::Value, out)?;
        out.print(".neg()")?;
        Ok(())
    }

    fn emit_long(&self, out: &mut Emitter<'_>) -> EmitResult {
        self.emit_native(EmitContext::Long, out)?;
        Ok(())
    }

    fn emit_double(&self, out: &mut Emitter<'_>) -> EmitResult {
        self.emit_native(EmitContext::Double, out)?;
        Ok(())
    }

    /// `(-<operand>)` with the operand in the same native context.
    ///
    /// `-Long.MIN_VALUE` wraps in native code but promotes through `neg`,
    /// so a constant `i64::MIN` operand has no `long` form.
    fn emit_native(&self, context: EmitContext, out: &mut Emitter<'_>) -> EmitResult<Option<Folded>> {
        if self.kind() != NodeKind::UnaryMinus {
            return Err(self.bound.shape_mismatch());
        }
        let operand = self.bound.operand(0)?;
        out.print("(-")?;
        let folded = native_operand(&*operand, context, out)?;
        out.print(")")?;
        match folded {
            Some(folded) => agreeing(self, context, folded.negated()),
            None => Ok(None),
        }
    }

    fn emit_self(&self, out: &mut Emitter<'_>) -> EmitResult {
        let operand = self.bound.operand(0)?;
        out.print("new UnaryMinusExpr(")?;
        operand.emit(EmitContext::SelfExpr, out)?;
        out.print(")")?;
        Ok(())
    }
}

pub(super) struct NotGen<'a> {
    pub(super) bound: Bound<'a>,
}

impl Generator for NotGen<'_> {
    fn node(&self) -> ExprRef<'_> {
        self.bound.node()
    }

    fn emit_value(&self, out: &mut Emitter<'_>) -> EmitResult {
        out.print("env.toValue(")?;
        self.emit_boolean(out)?;
        out.print(")")?;
        Ok(())
    }

    fn emit_boolean(&self, out: &mut Emitter<'_>) -> EmitResult {
        let operand = self.bound.operand(0)?;
        out.print("(!")?;
        operand.emit(EmitContext::Boolean, out)?;
        out.print(")")?;
        Ok(())
    }

    fn emit_self(&self, out: &mut Emitter<'_>) -> EmitResult {
        let operand = self.bound.operand(0)?;
        out.print("new UnaryNotExpr(")?;
        operand.emit(EmitContext::SelfExpr, out)?;
        out.print(")")?;
        Ok(())
    }
}
