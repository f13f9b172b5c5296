//! The boxed dynamic value.

use std::fmt;

use crate::numeric::{parse_numeric, parse_numeric_prefix, Number};

/// A dynamic value as seen by generated code.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Long(i64),
    Double(f64),
    Str(String),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Long(_) => "int",
            Value::Double(_) => "float",
            Value::Str(_) => "string",
        }
    }

    /// Truthiness: `null`, `false`, `0`, `0.0`, `""` and `"0"` are false.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Long(n) => *n != 0,
            Value::Double(d) => *d != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
        }
    }

    /// Numeric view used by arithmetic.
    ///
    /// Strings contribute their numeric prefix, or `0` when they have none.
    pub fn to_number(&self) -> Number {
        match self {
            Value::Null => Number::Long(0),
            Value::Bool(b) => Number::Long(i64::from(*b)),
            Value::Long(n) => Number::Long(*n),
            Value::Double(d) => Number::Double(*d),
            Value::Str(s) => parse_numeric_prefix(s).unwrap_or(Number::Long(0)),
        }
    }

    /// The number this value denotes if it is a number or a numeric string.
    pub fn as_numeric(&self) -> Option<Number> {
        match self {
            Value::Long(n) => Some(Number::Long(*n)),
            Value::Double(d) => Some(Number::Double(*d)),
            Value::Str(s) => parse_numeric(s),
            Value::Null | Value::Bool(_) => None,
        }
    }

    pub fn to_long(&self) -> i64 {
        match self.to_number() {
            Number::Long(n) => n,
            Number::Double(d) => double_to_long(d),
        }
    }

    pub fn to_double(&self) -> f64 {
        self.to_number().as_f64()
    }

    /// String conversion as performed by the language's `(string)` cast.
    pub fn to_php_string(&self) -> String {
        match self {
            Value::Null | Value::Bool(false) => String::new(),
            Value::Bool(true) => "1".to_string(),
            Value::Long(n) => n.to_string(),
            Value::Double(d) => double_to_string(*d),
            Value::Str(s) => s.clone(),
        }
    }
}

/// Float to integer conversion.
///
/// Non-finite values become `0`; finite values outside the `i64` range wrap
/// modulo 2^64.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is reduced into i64 range before the cast"
)]
fn double_to_long(d: f64) -> i64 {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
    if !d.is_finite() {
        return 0;
    }
    if (-TWO_POW_63..TWO_POW_63).contains(&d) {
        return d as i64;
    }
    let mut reduced = d.trunc().rem_euclid(TWO_POW_64);
    if reduced >= TWO_POW_63 {
        reduced -= TWO_POW_64;
    }
    reduced as i64
}

/// Float to string with 14 significant digits. Magnitudes from `1e14` up
/// and below `1e-4` use exponent form.
fn double_to_string(d: f64) -> String {
    if d.is_nan() {
        return "NAN".to_string();
    }
    if d.is_infinite() {
        return if d > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if d == 0.0 {
        return if d.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sci = format!("{d:.13e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..14).contains(&exp) {
        let decimals = usize::try_from(13 - exp).unwrap_or(0);
        let fixed = format!("{d:.decimals$}");
        return trim_fraction(&fixed).to_string();
    }

    let mantissa = trim_fraction(mantissa);
    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{mantissa}.0")
    };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{}", exp.abs())
}

/// Drop trailing zeros after a decimal point, and the point itself if bare.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Long(n) => Value::Long(n),
            Number::Double(d) => Value::Double(d),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Long(_) | Value::Double(_) => f.write_str(&self.to_php_string()),
        }
    }
}
