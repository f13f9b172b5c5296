//! Loose equality and inequality.
//!
//! The comparison itself is always the value layer's `eql`. Both operands
//! are emitted boxed, left first, so the left operand is evaluated first in
//! the generated code as well.

use quill_ir::{BinaryOp, ExprKind, ExprRef};

use crate::{Bound, EmitContext, EmitResult, Emitter, Generator};

pub(super) struct EqualityGen<'a> {
    pub(super) bound: Bound<'a>,
}

impl EqualityGen<'_> {
    /// Whether this is `!=` rather than `==`.
    fn negated(&self) -> EmitResult<bool> {
        match *self.bound.node().data() {
            ExprKind::Binary { op: BinaryOp::Eq, .. } => Ok(false),
            ExprKind::Binary { op: BinaryOp::NotEq, .. } => Ok(true),
            _ => Err(self.bound.shape_mismatch()),
        }
    }
}

impl Generator for EqualityGen<'_> {
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
        let negated = self.negated()?;
        let left = self.bound.operand(0)?;
        let right = self.bound.operand(1)?;
        if negated {
            out.print("(!")?;
        }
        left.emit(EmitContext::Value, out)?;
        out.print(".eql(")?;
        right.emit(EmitContext::Value, out)?;
        out.print(")")?;
        if negated {
            out.print(")")?;
        }
        Ok(())
    }

    fn emit_self(&self, out: &mut Emitter<'_>) -> EmitResult {
        let class = if self.negated()? {
            "BinaryNotEqualsExpr"
        } else {
            "BinaryEqualsExpr"
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
