//! Constant literals.

use quill_ir::{ExprKind, ExprRef, Literal};
use quill_rt::Value;

use crate::target::{double_literal, long_literal, string_literal};
use crate::{Bound, Contexts, EmitContext, EmitResult, Emitter, Folded, Generator};

pub(super) struct LiteralGen<'a> {
    pub(super) bound: Bound<'a>,
}

impl LiteralGen<'_> {
    fn literal(&self) -> EmitResult<Literal> {
        match *self.bound.node().data() {
            ExprKind::Literal(literal) => Ok(literal),
            _ => Err(self.bound.shape_mismatch()),
        }
    }

    /// Target expression constructing the boxed constant.
    fn boxed(&self, literal: Literal) -> String {
        match literal {
            Literal::Null => "NullValue.NULL".to_string(),
            Literal::Bool(true) => "BooleanValue.TRUE".to_string(),
            Literal::Bool(false) => "BooleanValue.FALSE".to_string(),
            Literal::Int(n) => format!("LongValue.create({})", long_literal(n)),
            Literal::Float(bits) => format!("new DoubleValue({})", double_literal(f64::from_bits(bits))),
            Literal::Str(name) => format!("env.createString({})", string_literal(self.bound.resolve(name))),
        }
    }

    /// The constant as the value layer sees it.
    fn value(&self, literal: Literal) -> Value {
        match literal {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(n) => Value::Long(n),
            Literal::Float(bits) => Value::Double(f64::from_bits(bits)),
            Literal::Str(name) => Value::string(self.bound.resolve(name)),
        }
    }
}

impl Generator for LiteralGen<'_> {
    fn node(&self) -> ExprRef<'_> {
        self.bound.node()
    }

    fn contexts(&self) -> EmitResult<Contexts> {
        Ok(match self.literal()? {
            Literal::Int(_) => Contexts::BOXED | Contexts::NUMERIC,
            Literal::Float(_) => Contexts::BOXED | Contexts::DOUBLE,
            Literal::Null | Literal::Bool(_) | Literal::Str(_) => Contexts::BOXED,
        })
    }

    fn emit_value(&self, out: &mut Emitter<'_>) -> EmitResult {
        let literal = self.literal()?;
        out.print(&self.boxed(literal))?;
        Ok(())
    }

    /// Truthiness of a constant is known at compile time.
    fn emit_boolean(&self, out: &mut Emitter<'_>) -> EmitResult {
        let truthy = self.value(self.literal()?).to_bool();
        out.print(if truthy { "true" } else { "false" })?;
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

    fn emit_native(&self, context: EmitContext, out: &mut Emitter<'_>) -> EmitResult<Option<Folded>> {
        let folded = match (context, self.literal()?) {
            (EmitContext::Long, Literal::Int(n)) => {
                out.print(&long_literal(n))?;
                Folded::long(n)
            }
            (EmitContext::Double, Literal::Int(n)) => {
                out.print(&format!("((double) {})", long_literal(n)))?;
                Folded::widened(n)
            }
            (EmitContext::Double, Literal::Float(bits)) => {
                let d = f64::from_bits(bits);
                out.print(&double_literal(d))?;
                Folded::double(d)
            }
            _ => return Err(self.unsupported(context)),
        };
        Ok(Some(folded))
    }

    fn emit_self(&self, out: &mut Emitter<'_>) -> EmitResult {
        let literal = self.literal()?;
        out.print(&format!("new LiteralExpr({})", self.boxed(literal)))?;
        Ok(())
    }
}
