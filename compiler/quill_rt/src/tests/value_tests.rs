use pretty_assertions::assert_eq;

use crate::{Number, Value};

#[test]
fn truthiness() {
    let falsy = [
        Value::Null,
        Value::Bool(false),
        Value::Long(0),
        Value::Double(0.0),
        Value::Double(-0.0),
        Value::string(""),
        Value::string("0"),
    ];
    for v in &falsy {
        assert!(!v.to_bool(), "{v:?} should be falsy");
    }
    let truthy = [
        Value::Bool(true),
        Value::Long(-1),
        Value::Double(f64::NAN),
        Value::string("0.0"),
        Value::string(" "),
        Value::string("a"),
    ];
    for v in &truthy {
        assert!(v.to_bool(), "{v:?} should be truthy");
    }
}

#[test]
fn to_number_uses_numeric_prefix() {
    assert_eq!(Value::string("12abc").to_number(), Number::Long(12));
    assert_eq!(Value::string("abc").to_number(), Number::Long(0));
    assert_eq!(Value::Bool(true).to_number(), Number::Long(1));
    assert_eq!(Value::Null.to_number(), Number::Long(0));
}

#[test]
fn to_long() {
    assert_eq!(Value::Double(3.9).to_long(), 3);
    assert_eq!(Value::Double(-3.9).to_long(), -3);
    assert_eq!(Value::Double(f64::NAN).to_long(), 0);
    assert_eq!(Value::Double(f64::INFINITY).to_long(), 0);
    // 2^63 wraps to i64::MIN
    assert_eq!(Value::Double(9_223_372_036_854_775_808.0).to_long(), i64::MIN);
    assert_eq!(Value::string(" 42 ").to_long(), 42);
}

#[test]
fn to_double() {
    assert_eq!(Value::Long(-7).to_double(), -7.0);
    assert_eq!(Value::string("2.5e1").to_double(), 25.0);
    assert_eq!(Value::Bool(false).to_double(), 0.0);
}

#[test]
fn string_conversion() {
    assert_eq!(Value::Null.to_php_string(), "");
    assert_eq!(Value::Bool(true).to_php_string(), "1");
    assert_eq!(Value::Bool(false).to_php_string(), "");
    assert_eq!(Value::Long(-5).to_php_string(), "-5");
    assert_eq!(Value::Double(1.5).to_php_string(), "1.5");
    assert_eq!(Value::Double(100.0).to_php_string(), "100");
    assert_eq!(Value::Double(-0.0).to_php_string(), "-0");
    assert_eq!(Value::Double(0.1 + 0.2).to_php_string(), "0.3");
    assert_eq!(Value::Double(1e20).to_php_string(), "1.0E+20");
    assert_eq!(Value::Double(1e14).to_php_string(), "1.0E+14");
    assert_eq!(Value::Double(99_999_999_999_999.0).to_php_string(), "99999999999999");
    assert_eq!(Value::Double(0.0001).to_php_string(), "0.0001");
    assert_eq!(Value::Double(0.00001).to_php_string(), "1.0E-5");
    assert_eq!(Value::Double(f64::INFINITY).to_php_string(), "INF");
    assert_eq!(Value::Double(f64::NEG_INFINITY).to_php_string(), "-INF");
    assert_eq!(Value::Double(f64::NAN).to_php_string(), "NAN");
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Long(1).type_name(), "int");
    assert_eq!(Value::Double(1.0).type_name(), "float");
    assert_eq!(Value::string("").type_name(), "string");
    assert_eq!(Value::from(true).type_name(), "bool");
}
