//! Value-level operator primitives.
//!
//! These are the only places the coercion table is evaluated. Generated
//! code calls them as `a.eql(b)`, `a.neg()`, `a.add(b)` and `a.sub(b)`.

use crate::numeric::{parse_numeric, Number};
use crate::Value;

/// Loose equality (`==`).
///
/// - `null`/`bool` against anything: both sides compared as booleans, except
///   `null == string`, which compares the string with `""`.
/// - number against number: numeric comparison (int widened to float when the
///   other side is a float).
/// - number against string: numeric when the string is numeric, otherwise the
///   number is converted to a string and compared byte-wise.
/// - string against string: numeric when both are numeric, byte-wise otherwise.
pub fn eql(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(b), other) | (other, Value::Bool(b)) => *b == other.to_bool(),
        (Value::Null, Value::Str(s)) | (Value::Str(s), Value::Null) => s.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !other.to_bool(),
        (Value::Str(a), Value::Str(b)) => match (left.as_numeric(), right.as_numeric()) {
            (Some(x), Some(y)) => numbers_eql(x, y),
            _ => a == b,
        },
        (Value::Str(s), number) | (number, Value::Str(s)) => {
            let Some(n) = number.as_numeric() else {
                return false;
            };
            match parse_numeric(s) {
                Some(m) => numbers_eql(n, m),
                None => number.to_php_string() == *s,
            }
        }
        (a, b) => match (a.as_numeric(), b.as_numeric()) {
            (Some(x), Some(y)) => numbers_eql(x, y),
            _ => false,
        },
    }
}

fn numbers_eql(a: Number, b: Number) -> bool {
    match (a, b) {
        (Number::Long(x), Number::Long(y)) => x == y,
        (x, y) => x.as_f64() == y.as_f64(),
    }
}

/// Arithmetic negation.
///
/// Negating `i64::MIN` has no integer result and is promoted to the float
/// `2^63`. Non-numbers negate their numeric view (`-null` is `0`,
/// `-true` is `-1`, `-"12abc"` is `-12`).
pub fn neg(value: &Value) -> Value {
    match value.to_number() {
        Number::Long(n) => match n.checked_neg() {
            Some(negated) => Value::Long(negated),
            None => Value::Double(-Number::Long(n).as_f64()),
        },
        Number::Double(d) => Value::Double(-d),
    }
}

/// Addition with overflow promotion to float.
pub fn add(left: &Value, right: &Value) -> Value {
    arith(left, right, i64::checked_add, |a, b| a + b)
}

/// Subtraction with overflow promotion to float.
pub fn sub(left: &Value, right: &Value) -> Value {
    arith(left, right, i64::checked_sub, |a, b| a - b)
}

#[inline]
fn arith(
    left: &Value,
    right: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Value {
    match (left.to_number(), right.to_number()) {
        (Number::Long(a), Number::Long(b)) => match int_op(a, b) {
            Some(n) => Value::Long(n),
            None => Value::Double(float_op(
                Number::Long(a).as_f64(),
                Number::Long(b).as_f64(),
            )),
        },
        (a, b) => Value::Double(float_op(a.as_f64(), b.as_f64())),
    }
}
