//! Evaluation of parsed target terms.

use quill_ir::{BinaryOp, ExprArena, Literal, Location, UnaryOp};
use quill_rt::{add, eql, neg, sub, Env, Value};
use quill_stack::ensure_sufficient_stack;

use super::parser::{Arith, Prim, Term};
use super::Native;
use crate::{ExecError, ExecResult};

pub(super) struct Machine<'m> {
    env: &'m mut Env,
    nodes: &'m mut ExprArena,
}

impl<'m> Machine<'m> {
    pub(super) fn new(env: &'m mut Env, nodes: &'m mut ExprArena) -> Self {
        Machine { env, nodes }
    }

    pub(super) fn eval(&mut self, term: &Term) -> ExecResult<Native> {
        ensure_sufficient_stack(|| match term {
            Term::Long(n) => Ok(Native::Long(*n)),
            Term::Double(d) => Ok(Native::Double(*d)),
            Term::Str(s) => Ok(Native::Str(s.clone())),
            Term::Bool(b) => Ok(Native::Bool(*b)),
            Term::Name(name) => Err(ExecError::UnknownName(name.clone())),
            Term::Field { target, name } => static_field(target, name),
            Term::Call {
                receiver,
                method,
                args,
            } => self.call(receiver, method, args),
            Term::New { class, args } => self.construct(class, args),
            Term::Neg(operand) => match self.eval(operand)? {
                Native::Long(n) => Ok(Native::Long(n.wrapping_neg())),
                Native::Double(d) => Ok(Native::Double(-d)),
                other => Err(ExecError::TypeMismatch {
                    operation: "-".to_string(),
                    expected: "long or double",
                    found: other.type_name(),
                }),
            },
            Term::Not(operand) => Ok(Native::Bool(!self.eval(operand)?.into_bool("!")?)),
            Term::Cast { to, operand } => cast(*to, self.eval(operand)?),
            Term::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                arithmetic(*op, left, right)
            }
        })
    }

    /// Evaluate arguments left to right, checking their count.
    fn args(&mut self, operation: &str, args: &[Term], expected: usize) -> ExecResult<Vec<Native>> {
        if args.len() != expected {
            return Err(ExecError::Arity {
                operation: operation.to_string(),
                expected,
                found: args.len(),
            });
        }
        args.iter().map(|arg| self.eval(arg)).collect()
    }

    fn call(&mut self, receiver: &Term, method: &str, args: &[Term]) -> ExecResult<Native> {
        if let Term::Name(class) = receiver {
            return self.static_call(class, method, args);
        }
        let receiver = self.eval(receiver)?.into_value(method)?;
        let value = match method {
            "eql" => {
                let other = self.value_arg(method, args)?;
                return Ok(Native::Bool(eql(&receiver, &other)));
            }
            "add" => {
                let other = self.value_arg(method, args)?;
                add(&receiver, &other)
            }
            "sub" => {
                let other = self.value_arg(method, args)?;
                sub(&receiver, &other)
            }
            "neg" => {
                self.args(method, args, 0)?;
                neg(&receiver)
            }
            "toBoolean" => {
                self.args(method, args, 0)?;
                return Ok(Native::Bool(receiver.to_bool()));
            }
            "toLong" => {
                self.args(method, args, 0)?;
                return Ok(Native::Long(receiver.to_long()));
            }
            "toDouble" => {
                self.args(method, args, 0)?;
                return Ok(Native::Double(receiver.to_double()));
            }
            _ => {
                return Err(ExecError::UnknownMethod {
                    receiver: "Value".to_string(),
                    method: method.to_string(),
                })
            }
        };
        Ok(Native::Value(value))
    }

    fn value_arg(&mut self, method: &str, args: &[Term]) -> ExecResult<Value> {
        let [arg] = one(self.args(method, args, 1)?, method)?;
        arg.into_value(method)
    }

    fn static_call(&mut self, class: &str, method: &str, args: &[Term]) -> ExecResult<Native> {
        let operation = format!("{class}.{method}");
        match (class, method) {
            ("env", "getValue") => {
                let [name] = one(self.args(&operation, args, 1)?, &operation)?;
                let name = name.into_str(&operation)?;
                Ok(Native::Value(self.env.get_value(&name)))
            }
            ("env", "setValue") => {
                let mut args = self.args(&operation, args, 2)?.into_iter();
                let (Some(name), Some(value)) = (args.next(), args.next()) else {
                    return Err(arity(&operation, 2, 0));
                };
                let name = name.into_str(&operation)?;
                let value = value.into_value(&operation)?;
                Ok(Native::Value(self.env.set_value(&name, value)))
            }
            ("env", "toValue") => {
                let [b] = one(self.args(&operation, args, 1)?, &operation)?;
                Ok(Native::Value(self.env.to_value(b.into_bool(&operation)?)))
            }
            ("env", "createString") => {
                let [s] = one(self.args(&operation, args, 1)?, &operation)?;
                Ok(Native::Value(self.env.create_string(&s.into_str(&operation)?)))
            }
            ("LongValue", "create") => {
                let [n] = one(self.args(&operation, args, 1)?, &operation)?;
                Ok(Native::Value(Value::Long(n.into_long(&operation)?)))
            }
            _ => Err(ExecError::UnknownMethod {
                receiver: class.to_string(),
                method: method.to_string(),
            }),
        }
    }

    fn construct(&mut self, class: &str, args: &[Term]) -> ExecResult<Native> {
        let at = Location::DUMMY;
        let operation = format!("new {class}");
        let id = match class {
            "DoubleValue" => {
                let [d] = one(self.args(&operation, args, 1)?, &operation)?;
                return Ok(Native::Value(Value::Double(d.into_double(&operation)?)));
            }
            "LiteralExpr" => {
                let [value] = one(self.args(&operation, args, 1)?, &operation)?;
                match value.into_value(&operation)? {
                    Value::Null => self.nodes.null(at),
                    Value::Bool(b) => self.nodes.bool(b, at),
                    Value::Long(n) => self.nodes.int(n, at),
                    Value::Double(d) => self.nodes.literal(Literal::float(d), at),
                    Value::Str(s) => self.nodes.string(&s, at),
                }
            }
            "VarExpr" => {
                let [name] = one(self.args(&operation, args, 1)?, &operation)?;
                self.nodes.var(&name.into_str(&operation)?, at)
            }
            "AssignExpr" => {
                let mut args = self.args(&operation, args, 2)?.into_iter();
                let (Some(name), Some(value)) = (args.next(), args.next()) else {
                    return Err(arity(&operation, 2, 0));
                };
                let name = name.into_str(&operation)?;
                let value = value.into_node(&operation)?;
                self.nodes.assign(&name, value, at)
            }
            "UnaryMinusExpr" | "UnaryNotExpr" => {
                let op = if class == "UnaryMinusExpr" {
                    UnaryOp::Neg
                } else {
                    UnaryOp::Not
                };
                let [operand] = one(self.args(&operation, args, 1)?, &operation)?;
                let operand = operand.into_node(&operation)?;
                self.nodes.unary(op, operand, at)
            }
            "BinaryEqualsExpr" | "BinaryNotEqualsExpr" | "BinaryAddExpr" | "BinarySubExpr" => {
                let op = match class {
                    "BinaryEqualsExpr" => BinaryOp::Eq,
                    "BinaryNotEqualsExpr" => BinaryOp::NotEq,
                    "BinaryAddExpr" => BinaryOp::Add,
                    _ => BinaryOp::Sub,
                };
                let mut args = self.args(&operation, args, 2)?.into_iter();
                let (Some(left), Some(right)) = (args.next(), args.next()) else {
                    return Err(arity(&operation, 2, 0));
                };
                let left = left.into_node(&operation)?;
                let right = right.into_node(&operation)?;
                self.nodes.binary(op, left, right, at)
            }
            _ => return Err(ExecError::UnknownClass(class.to_string())),
        };
        Ok(Native::Node(id))
    }
}

fn arity(operation: &str, expected: usize, found: usize) -> ExecError {
    ExecError::Arity {
        operation: operation.to_string(),
        expected,
        found,
    }
}

/// Destructure a single evaluated argument.
fn one(args: Vec<Native>, operation: &str) -> ExecResult<[Native; 1]> {
    let found = args.len();
    <[Native; 1]>::try_from(args).map_err(|_| arity(operation, 1, found))
}

fn static_field(target: &Term, name: &str) -> ExecResult<Native> {
    let Term::Name(class) = target else {
        return Err(ExecError::UnknownName(name.to_string()));
    };
    let native = match (class.as_str(), name) {
        ("Long", "MIN_VALUE") => Native::Long(i64::MIN),
        ("Long", "MAX_VALUE") => Native::Long(i64::MAX),
        ("Double", "NaN") => Native::Double(f64::NAN),
        ("Double", "POSITIVE_INFINITY") => Native::Double(f64::INFINITY),
        ("Double", "NEGATIVE_INFINITY") => Native::Double(f64::NEG_INFINITY),
        ("NullValue", "NULL") => Native::Value(Value::Null),
        ("BooleanValue", "TRUE") => Native::Value(Value::Bool(true)),
        ("BooleanValue", "FALSE") => Native::Value(Value::Bool(false)),
        _ => return Err(ExecError::UnknownName(format!("{class}.{name}"))),
    };
    Ok(native)
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "Java primitive conversions round and saturate the same way `as` does"
)]
fn cast(to: Prim, operand: Native) -> ExecResult<Native> {
    match (to, operand) {
        (Prim::Double, Native::Long(n)) => Ok(Native::Double(n as f64)),
        (Prim::Double, Native::Double(d)) => Ok(Native::Double(d)),
        (Prim::Long, Native::Long(n)) => Ok(Native::Long(n)),
        (Prim::Long, Native::Double(d)) => Ok(Native::Long(d as i64)),
        (_, other) => Err(ExecError::TypeMismatch {
            operation: "cast".to_string(),
            expected: "long or double",
            found: other.type_name(),
        }),
    }
}

/// Binary numeric promotion: `long op long` wraps, anything with a
/// `double` is computed in `double`.
#[expect(
    clippy::cast_precision_loss,
    reason = "Java widens long to double the same way"
)]
fn arithmetic(op: Arith, left: Native, right: Native) -> ExecResult<Native> {
    let symbol = match op {
        Arith::Add => "+",
        Arith::Sub => "-",
    };
    let widen = |n: Native| match n {
        Native::Long(n) => Ok(n as f64),
        Native::Double(d) => Ok(d),
        other => Err(ExecError::TypeMismatch {
            operation: symbol.to_string(),
            expected: "long or double",
            found: other.type_name(),
        }),
    };
    if let (Native::Long(a), Native::Long(b)) = (&left, &right) {
        return Ok(Native::Long(match op {
            Arith::Add => a.wrapping_add(*b),
            Arith::Sub => a.wrapping_sub(*b),
        }));
    }
    let (a, b) = (widen(left)?, widen(right)?);
    Ok(Native::Double(match op {
        Arith::Add => a + b,
        Arith::Sub => a - b,
    }))
}
