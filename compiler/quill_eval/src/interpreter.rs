//! Direct tree-walking evaluation.

use quill_ir::{BinaryOp, ExprArena, ExprId, ExprKind, Literal, UnaryOp};
use quill_rt::{add, eql, neg, sub, Env, Value};
use quill_stack::ensure_sufficient_stack;

/// Evaluates nodes against an environment.
///
/// Operands are evaluated left to right. Each `eval_*` method is the
/// meaning of a node in the corresponding emission context: the boxed
/// result, then converted by the value layer.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    env: &'a mut Env,
}

impl<'a> Interpreter<'a> {
    pub fn new(arena: &'a ExprArena, env: &'a mut Env) -> Self {
        Interpreter { arena, env }
    }

    pub fn eval_value(&mut self, id: ExprId) -> Value {
        ensure_sufficient_stack(|| match *self.arena.kind(id) {
            ExprKind::Literal(literal) => self.literal(literal),
            ExprKind::Var(name) => self.env.get_value(self.arena.resolve(name)),
            ExprKind::Assign { target, value } => {
                let value = self.eval_value(value);
                self.env.set_value(self.arena.resolve(target), value)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_value(left);
                let right = self.eval_value(right);
                match op {
                    BinaryOp::Eq => Value::Bool(eql(&left, &right)),
                    BinaryOp::NotEq => Value::Bool(!eql(&left, &right)),
                    BinaryOp::Add => add(&left, &right),
                    BinaryOp::Sub => sub(&left, &right),
                }
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_value(operand);
                match op {
                    UnaryOp::Neg => neg(&operand),
                    UnaryOp::Not => Value::Bool(!operand.to_bool()),
                }
            }
        })
    }

    pub fn eval_boolean(&mut self, id: ExprId) -> bool {
        self.eval_value(id).to_bool()
    }

    pub fn eval_long(&mut self, id: ExprId) -> i64 {
        self.eval_value(id).to_long()
    }

    pub fn eval_double(&mut self, id: ExprId) -> f64 {
        self.eval_value(id).to_double()
    }

    /// Copy the tree rooted at `id` into `out`, as constructing it at
    /// runtime would. Nothing is evaluated.
    pub fn rebuild(&self, id: ExprId, out: &mut ExprArena) -> ExprId {
        ensure_sufficient_stack(|| {
            let location = self.arena.location(id);
            match *self.arena.kind(id) {
                ExprKind::Literal(Literal::Str(name)) => out.string(self.arena.resolve(name), location),
                ExprKind::Literal(literal) => out.literal(literal, location),
                ExprKind::Var(name) => out.var(self.arena.resolve(name), location),
                ExprKind::Assign { target, value } => {
                    let value = self.rebuild(value, out);
                    out.assign(self.arena.resolve(target), value, location)
                }
                ExprKind::Binary { op, left, right } => {
                    let left = self.rebuild(left, out);
                    let right = self.rebuild(right, out);
                    out.binary(op, left, right, location)
                }
                ExprKind::Unary { op, operand } => {
                    let operand = self.rebuild(operand, out);
                    out.unary(op, operand, location)
                }
            }
        })
    }

    fn literal(&self, literal: Literal) -> Value {
        match literal {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(n) => Value::Long(n),
            Literal::Float(bits) => Value::Double(f64::from_bits(bits)),
            Literal::Str(name) => self.env.create_string(self.arena.resolve(name)),
        }
    }
}
