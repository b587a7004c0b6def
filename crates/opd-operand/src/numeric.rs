//! Number-backed operand

use opd_capability::{Capability, Number};
use serde::{Deserialize, Serialize};

/// Operand wrapping a plain number
///
/// `combine(n)` returns `value + n`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericOperand {
    value: Number,
}

impl NumericOperand {
    /// Create operand from any numeric value
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<Number>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Wrapped value
    #[inline]
    #[must_use]
    pub fn value(&self) -> Number {
        self.value
    }
}

impl Capability for NumericOperand {
    #[inline]
    fn combine(&self, increment: Number) -> Number {
        self.value + increment
    }
}

impl From<Number> for NumericOperand {
    #[inline]
    fn from(value: Number) -> Self {
        Self::new(value)
    }
}

impl From<i64> for NumericOperand {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<f64> for NumericOperand {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn combine_adds_increment() {
        let operand = NumericOperand::new(1);
        assert_eq!(operand.combine(Number::ONE), Number::Int(2));
    }

    #[test]
    fn combine_with_float() {
        let operand = NumericOperand::new(2.5);
        assert_eq!(operand.combine(Number::Int(2)), Number::Float(4.5));
    }

    #[test]
    fn combine_leaves_value_untouched() {
        let operand = NumericOperand::from(10i64);
        let _ = operand.combine(Number::Int(5));
        assert_eq!(operand.value(), Number::Int(10));
    }

    #[test]
    fn serde_transparent() {
        let operand: NumericOperand = serde_json::from_str("3").unwrap();
        assert_eq!(operand, NumericOperand::new(3));
        assert_eq!(serde_json::to_string(&operand).unwrap(), "3");
    }

    proptest! {
        #[test]
        fn combine_matches_addition(x in -1_000_000_000i64..1_000_000_000, n in -1000i64..1000) {
            prop_assert_eq!(NumericOperand::new(x).combine(Number::Int(n)), Number::Int(x + n));
        }
    }
}
