//! Tests for `eql`, `neg`, `add` and `sub`.

use proptest::prelude::*;

use crate::{add, eql, neg, sub, Value};

fn s(text: &str) -> Value {
    Value::string(text)
}

mod loose_equality {
    use super::*;

    #[test]
    fn int_and_numeric_string() {
        assert!(eql(&Value::Long(5), &s("5")));
        assert!(eql(&s("5"), &Value::Long(5)));
        assert!(eql(&Value::Long(5), &s("5.0")));
        assert!(eql(&Value::Long(5), &s(" 5")));
        assert!(eql(&Value::Long(5), &s("5 ")));
        assert!(eql(&Value::Long(100), &s("1e2")));
    }

    #[test]
    fn int_and_non_numeric_string() {
        assert!(!eql(&Value::Long(0), &s("abc")));
        assert!(!eql(&s("abc"), &Value::Long(0)));
        assert!(!eql(&Value::Long(5), &s("5abc")));
        assert!(!eql(&Value::Long(0), &s("")));
    }

    #[test]
    fn float_and_special_strings() {
        assert!(eql(&Value::Double(f64::INFINITY), &s("INF")));
        assert!(eql(&Value::Double(f64::NAN), &s("NAN")));
        assert!(eql(&Value::Double(1.5), &s("1.50")));
    }

    #[test]
    fn numeric_strings_compare_numerically() {
        assert!(eql(&s("1e3"), &s("1000")));
        assert!(eql(&s("10"), &s("010")));
        assert!(eql(&s("abc"), &s("abc")));
        assert!(!eql(&s("abc"), &s("ABC")));
        assert!(!eql(&s("1e3"), &s("1000abc")));
    }

    #[test]
    fn null_comparisons() {
        assert!(eql(&Value::Null, &Value::Null));
        assert!(eql(&Value::Null, &Value::Bool(false)));
        assert!(eql(&Value::Null, &Value::Long(0)));
        assert!(eql(&Value::Null, &Value::Double(0.0)));
        assert!(eql(&Value::Null, &s("")));
        assert!(!eql(&Value::Null, &s("0")));
        assert!(!eql(&Value::Null, &Value::Long(1)));
    }

    #[test]
    fn bool_comparisons() {
        assert!(eql(&Value::Bool(true), &s("abc")));
        assert!(eql(&Value::Bool(false), &s("0")));
        assert!(eql(&Value::Bool(true), &Value::Long(-3)));
        assert!(!eql(&Value::Bool(true), &Value::Null));
        assert!(eql(&s(""), &Value::Bool(false)));
    }

    #[test]
    fn mixed_numbers() {
        assert!(eql(&Value::Long(1), &Value::Double(1.0)));
        assert!(!eql(&Value::Long(1), &Value::Double(1.5)));
        assert!(!eql(&Value::Double(f64::NAN), &Value::Double(f64::NAN)));
    }

    fn any_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Long),
            (-1e6f64..1e6f64).prop_map(Value::Double),
            "[ ]?-?[0-9]{0,3}(\\.[0-9]{0,2})?[a-z]?".prop_map(Value::Str),
        ]
    }

    proptest! {
        #[test]
        fn reflexive(v in any_value()) {
            prop_assert!(eql(&v, &v));
        }

        #[test]
        fn symmetric(a in any_value(), b in any_value()) {
            prop_assert_eq!(eql(&a, &b), eql(&b, &a));
        }

        #[test]
        fn ints_equal_their_decimal_string(n in any::<i64>()) {
            prop_assert!(eql(&Value::Long(n), &Value::string(n.to_string())));
        }
    }
}

mod negation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int() {
        assert_eq!(neg(&Value::Long(5)), Value::Long(-5));
        assert_eq!(neg(&Value::Long(-5)), Value::Long(5));
        assert_eq!(neg(&Value::Long(i64::MAX)), Value::Long(-i64::MAX));
    }

    #[test]
    fn int_min_promotes_to_float() {
        assert_eq!(
            neg(&Value::Long(i64::MIN)),
            Value::Double(9_223_372_036_854_775_808.0)
        );
    }

    #[test]
    fn float() {
        assert_eq!(neg(&Value::Double(3.5)), Value::Double(-3.5));
        assert_eq!(neg(&Value::Double(-0.0)), Value::Double(0.0));
    }

    #[test]
    fn non_numbers_use_numeric_view() {
        assert_eq!(neg(&Value::Null), Value::Long(0));
        assert_eq!(neg(&Value::Bool(true)), Value::Long(-1));
        assert_eq!(neg(&s("12abc")), Value::Long(-12));
        assert_eq!(neg(&s("2.5")), Value::Double(-2.5));
        assert_eq!(neg(&s("abc")), Value::Long(0));
    }
}

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_add_and_sub() {
        assert_eq!(add(&Value::Long(2), &Value::Long(3)), Value::Long(5));
        assert_eq!(sub(&Value::Long(2), &Value::Long(3)), Value::Long(-1));
    }

    #[test]
    fn overflow_promotes() {
        assert_eq!(
            add(&Value::Long(i64::MAX), &Value::Long(1)),
            Value::Double(9_223_372_036_854_775_808.0)
        );
        assert_eq!(
            sub(&Value::Long(i64::MIN), &Value::Long(1)),
            Value::Double(-9_223_372_036_854_775_808.0)
        );
    }

    #[test]
    fn mixed_operands() {
        assert_eq!(add(&Value::Long(1), &Value::Double(0.5)), Value::Double(1.5));
        assert_eq!(add(&s("5"), &Value::Long(1)), Value::Long(6));
        assert_eq!(add(&s("1.5"), &Value::Null), Value::Double(1.5));
        assert_eq!(sub(&Value::Bool(true), &s("3")), Value::Long(-2));
    }
}
