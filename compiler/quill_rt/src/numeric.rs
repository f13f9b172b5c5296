//! Numeric string recognition.
//!
//! A string is *numeric* when, after optional leading whitespace, it holds an
//! optionally signed decimal integer or float (with optional exponent) and
//! nothing but whitespace afterwards. A *numeric prefix* only requires the
//! number at the start; the rest of the string is ignored.

/// A parsed number, integer or float.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Long(i64),
    Double(f64),
}

impl Number {
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer-to-float widening is the language's own promotion rule"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Long(n) => n as f64,
            Number::Double(d) => d,
        }
    }
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Scan a number at the start of `s` (after leading whitespace).
///
/// Returns the number and the byte offset just past it.
fn scan(s: &str) -> Option<(Number, usize)> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    while i < len && is_whitespace(bytes[i]) {
        i += 1;
    }
    let start = i;
    if i < len && matches!(bytes[i], b'+' | b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut is_float = false;
    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac_digits = j - (i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i = j;
            is_float = true;
        }
    }
    if int_digits == 0 && !is_float {
        return None;
    }

    if i < len && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
            is_float = true;
        }
    }

    let text = &s[start..i];
    let number = if is_float {
        Number::Double(text.parse::<f64>().ok()?)
    } else {
        match text.parse::<i64>() {
            Ok(n) => Number::Long(n),
            // Integer strings outside the i64 range are floats.
            Err(_) => Number::Double(text.parse::<f64>().ok()?),
        }
    };
    Some((number, i))
}

/// Parse a fully numeric string (leading and trailing whitespace allowed).
pub fn parse_numeric(s: &str) -> Option<Number> {
    let (number, end) = scan(s)?;
    s.as_bytes()[end..]
        .iter()
        .all(|&b| is_whitespace(b))
        .then_some(number)
}

/// Parse the numeric prefix of a string, ignoring anything after it.
pub fn parse_numeric_prefix(s: &str) -> Option<Number> {
    scan(s).map(|(number, _)| number)
}
