//! Addition and subtraction.

use quill_ir::{BinaryOp, ExprKind, ExprRef};

use super::{agreeing, native_contexts, native_operand};
use crate::{Bound, Contexts, EmitContext, EmitResult, Emitter, Folded, Generator};

pub(super) struct ArithmeticGen<'a> {
    pub(super) bound: Bound<'a>,
}

impl ArithmeticGen<'_> {
    fn op(&self) -> EmitResult<BinaryOp> {
        match *self.bound.node().data() {
            ExprKind::Binary {
                op: op @ (BinaryOp::Add | BinaryOp::Sub),
                ..
            } => Ok(op),
            _ => Err(self.bound.shape_mismatch()),
        }
    }
}

impl Generator for ArithmeticGen<'_> {
    fn node(&self) -> ExprRef<'_> {
        self.bound.node()
    }

    /// Native forms need both operands native in the same context, and a
    /// native result equal to what `add`/`sub` give.
    fn contexts(&self) -> EmitResult<Contexts> {
        native_contexts(self)
    }

    fn emit_value(&self, out: &mut Emitter<'_>) -> EmitResult {
        let method = match self.op()? {
            BinaryOp::Sub => "sub",
            _ => "add",
        };
        let left = self.bound.operand(0)?;
        let right = self.bound.operand(1)?;
        left.emit(EmitContext::Value, out)?;
        out.print(&format!(".{method}("))?;
        right.emit(EmitContext::Value, out)?;
        out.print(")")?;
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

    /// `(<left> op <right>)` with both operands in the same native context.
    fn emit_native(&self, context: EmitContext, out: &mut Emitter<'_>) -> EmitResult<Option<Folded>> {
        let op = self.op()?;
        let left = self.bound.operand(0)?;
        let right = self.bound.operand(1)?;
        out.print("(")?;
        let l = native_operand(&*left, context, out)?;
        out.print(&format!(" {} ", op.as_symbol()))?;
        let r = native_operand(&*right, context, out)?;
        out.print(")")?;
        let (Some(l), Some(r)) = (l, r) else {
            return Ok(None);
        };
        match l.binary(op, &r) {
            Some(folded) => agreeing(self, context, folded),
            None => Err(self.unsupported(context)),
        }
    }

    fn emit_self(&self, out: &mut Emitter<'_>) -> EmitResult {
        let class = match self.op()? {
            BinaryOp::Sub => "BinarySubExpr",
            _ => "BinaryAddExpr",
        };
        let left = self.bound.operand(0)?;
        let right = self.bound.operand(1)?;
        out.print(&format!("new {class}("))?;
        left.emit(EmitContext::SelfExpr, out)?;
        out.print(", ")?;
        right.emit(EmitContext::SelfExpr, out)?;
        out.print(")")?;
        Ok(())
    }
}
