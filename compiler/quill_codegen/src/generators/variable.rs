//! Variable reads and assignments.

use quill_ir::{ExprKind, ExprRef, Name};

use crate::target::string_literal;
use crate::{Bound, EmitContext, EmitResult, Emitter, Generator};

pub(super) struct VarGen<'a> {
    pub(super) bound: Bound<'a>,
}

impl VarGen<'_> {
    fn name(&self) -> EmitResult<Name> {
        match *self.bound.node().data() {
            ExprKind::Var(name) => Ok(name),
            _ => Err(self.bound.shape_mismatch()),
        }
    }
}

/// A variable holds any value, so only the boxed contexts are served.
impl Generator for VarGen<'_> {
    fn node(&self) -> ExprRef<'_> {
        self.bound.node()
    }

    fn emit_value(&self, out: &mut Emitter<'_>) -> EmitResult {
        let name = string_literal(self.bound.resolve(self.name()?));
        out.print(&format!("env.getValue({name})"))?;
        Ok(())
    }

    fn emit_self(&self, out: &mut Emitter<'_>) -> EmitResult {
        let name = string_literal(self.bound.resolve(self.name()?));
        out.print(&format!("new VarExpr({name})"))?;
        Ok(())
    }
}

pub(super) struct AssignGen<'a> {
    pub(super) bound: Bound<'a>,
}

impl AssignGen<'_> {
    fn target(&self) -> EmitResult<String> {
        match *self.bound.node().data() {
            ExprKind::Assign { target, .. } => Ok(string_literal(self.bound.resolve(target))),
            _ => Err(self.bound.shape_mismatch()),
        }
    }

    fn emit_with(&self, head: &str, context: EmitContext, out: &mut Emitter<'_>) -> EmitResult {
        let target = self.target()?;
        let value = self.bound.operand(0)?;
        out.print(&format!("{head}({target}, "))?;
        value.emit(context, out)?;
        out.print(")")?;
        Ok(())
    }
}

impl Generator for AssignGen<'_> {
    fn node(&self) -> ExprRef<'_> {
        self.bound.node()
    }

    fn emit_value(&self, out: &mut Emitter<'_>) -> EmitResult {
        self.emit_with("env.setValue", EmitContext::Value, out)
    }

    fn emit_self(&self, out: &mut Emitter<'_>) -> EmitResult {
        self.emit_with("new AssignExpr", EmitContext::SelfExpr, out)
    }
}
