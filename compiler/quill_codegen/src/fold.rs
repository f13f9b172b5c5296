//! Compile-time results of native numeric forms.

use quill_ir::BinaryOp;
use quill_rt::{add, neg, sub, Value};

/// What an emitted `long` or `double` expression evaluates to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NativeNumber {
    Long(i64),
    Double(f64),
}

impl NativeNumber {
    fn negated(self) -> NativeNumber {
        match self {
            NativeNumber::Long(n) => NativeNumber::Long(n.wrapping_neg()),
            NativeNumber::Double(d) => NativeNumber::Double(-d),
        }
    }

    /// `self op other`, or `None` when the operands are in different contexts.
    fn binary(self, op: BinaryOp, other: NativeNumber) -> Option<NativeNumber> {
        let sum = match (self, other) {
            (NativeNumber::Long(a), NativeNumber::Long(b)) => NativeNumber::Long(match op {
                BinaryOp::Sub => a.wrapping_sub(b),
                _ => a.wrapping_add(b),
            }),
            (NativeNumber::Double(a), NativeNumber::Double(b)) => NativeNumber::Double(match op {
                BinaryOp::Sub => a - b,
                _ => a + b,
            }),
            _ => return None,
        };
        Some(sum)
    }
}

/// A constant native form, folded both ways: as the emitted native
/// expression computes it and as the boxed form computes it.
///
/// The native form is only usable while the two agree. A `long` that
/// overflows wraps where the boxed form promotes to a float, and a `double`
/// sum of large integers rounds where the boxed form adds exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct Folded {
    pub native: NativeNumber,
    pub boxed: Value,
}

impl Folded {
    pub fn long(n: i64) -> Self {
        Folded {
            native: NativeNumber::Long(n),
            boxed: Value::Long(n),
        }
    }

    /// `n` widened to `double`, as `((double) nL)` does.
    pub fn widened(n: i64) -> Self {
        let boxed = Value::Long(n);
        Folded {
            native: NativeNumber::Double(boxed.to_double()),
            boxed,
        }
    }

    pub fn double(d: f64) -> Self {
        Folded {
            native: NativeNumber::Double(d),
            boxed: Value::Double(d),
        }
    }

    pub(crate) fn negated(&self) -> Folded {
        Folded {
            native: self.native.negated(),
            boxed: neg(&self.boxed),
        }
    }

    pub(crate) fn binary(&self, op: BinaryOp, other: &Folded) -> Option<Folded> {
        let boxed = match op {
            BinaryOp::Sub => sub(&self.boxed, &other.boxed),
            _ => add(&self.boxed, &other.boxed),
        };
        Some(Folded {
            native: self.native.binary(op, other.native)?,
            boxed,
        })
    }

    /// Whether the native result is what the boxed result converts to.
    #[allow(clippy::float_cmp, reason = "Results must be identical, not close")]
    pub fn agrees(&self) -> bool {
        match self.native {
            NativeNumber::Long(n) => self.boxed == Value::Long(n),
            NativeNumber::Double(d) => {
                let boxed = self.boxed.to_double();
                d == boxed || (d.is_nan() && boxed.is_nan())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_overflow_disagrees() {
        let min = Folded::long(i64::MIN);
        assert!(min.agrees());
        assert!(!min.negated().agrees());
        assert!(!min.binary(BinaryOp::Sub, &Folded::long(1)).is_some_and(|f| f.agrees()));
        assert!(Folded::long(i64::MAX)
            .binary(BinaryOp::Sub, &Folded::long(1))
            .is_some_and(|f| f.agrees()));
    }

    #[test]
    fn double_rounding_disagrees() {
        let big = Folded::widened((1 << 53) + 1);
        let one = Folded::widened(1);
        assert!(!big.binary(BinaryOp::Add, &one).is_some_and(|f| f.agrees()));
        assert!(Folded::widened(2).binary(BinaryOp::Add, &one).is_some_and(|f| f.agrees()));
        assert!(Folded::double(f64::NAN).negated().agrees());
    }

    #[test]
    fn mixed_contexts_do_not_combine() {
        assert!(Folded::long(1).binary(BinaryOp::Add, &Folded::double(1.0)).is_none());
    }
}
