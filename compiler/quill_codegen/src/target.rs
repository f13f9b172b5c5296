//! Target-language literal syntax.
//!
//! Negative numbers are always parenthesized so that a native negation in
//! front of them never forms a `--` token.

use std::fmt::Write;

/// Source form of a `long` constant.
///
/// `i64::MIN` has no literal form (its magnitude does not fit), so it is
/// spelled `Long.MIN_VALUE`.
pub fn long_literal(n: i64) -> String {
    if n == i64::MIN {
        "Long.MIN_VALUE".to_string()
    } else if n < 0 {
        format!("(-{}L)", n.unsigned_abs())
    } else {
        format!("{n}L")
    }
}

/// Source form of a `double` constant.
///
/// Uses the shortest representation that parses back to the same bits.
pub fn double_literal(d: f64) -> String {
    if d.is_nan() {
        "Double.NaN".to_string()
    } else if d == f64::INFINITY {
        "Double.POSITIVE_INFINITY".to_string()
    } else if d == f64::NEG_INFINITY {
        "Double.NEGATIVE_INFINITY".to_string()
    } else if d.is_sign_negative() {
        format!("(-{:?})", d.abs())
    } else {
        format!("{d:?}")
    }
}

/// Double-quoted string literal with escapes.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
