//! Numeric domain
//!
//! [`Number`] keeps integers exact and widens to floating point only when it
//! must (a float operand, or an integer overflow).

use crate::error::{ParseError, ParseErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Number produced by combining operands
///
/// Equality is numeric and exact, so `Int(2) == Float(2.0)` but an integer
/// never equals a float that merely rounds to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Exact integer
    Int(i64),

    /// Floating point value
    ///
    /// Parsing and the boundary adapters only ever produce finite values.
    Float(f64),
}

impl Number {
    /// Integer zero
    pub const ZERO: Self = Self::Int(0);

    /// Integer one, the increment used by the dispatcher
    pub const ONE: Self = Self::Int(1);

    /// Value as `f64` (may round large integers)
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Check if value is held as an exact integer
    #[inline]
    #[must_use]
    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Check if value is neither NaN nor infinite
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.is_finite(),
        }
    }
}

impl Add for Number {
    type Output = Number;

    #[allow(clippy::cast_precision_loss)]
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(a as f64 + b as f64), Self::Int),
            (a, b) => Self::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => int_eq_float(i, f),
        }
    }
}

// Exact comparison: widening the integer to f64 would round above 2^53 and
// break transitivity.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn int_eq_float(i: i64, f: f64) -> bool {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) && f as i64 == i
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl FromStr for Number {
    type Err = ParseError;

    /// Parse a numeric literal
    ///
    /// Accepts an optional sign followed by digits, an optional fraction and
    /// an optional exponent. Integers that fit in `i64` stay exact. Padding,
    /// `NaN` and `inf` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::new(s, ParseErrorKind::Empty));
        }
        if !looks_numeric(s) {
            return Err(ParseError::new(s, ParseErrorKind::Invalid));
        }

        if let Ok(i) = s.parse::<i64>() {
            return Ok(Self::Int(i));
        }

        match s.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Self::Float(x)),
            Ok(_) => Err(ParseError::new(s, ParseErrorKind::NonFinite)),
            Err(_) => Err(ParseError::new(s, ParseErrorKind::Invalid)),
        }
    }
}

// Gate before handing text to the std parsers, which also accept "inf"/"NaN".
fn looks_numeric(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn int_addition_is_exact() {
        assert_eq!(Number::Int(1) + Number::ONE, Number::Int(2));
        assert!((Number::Int(1) + Number::ONE).is_int());
    }

    #[test]
    fn int_overflow_widens_to_float() {
        let sum = Number::Int(i64::MAX) + Number::ONE;
        assert!(!sum.is_int());
        assert_eq!(sum, Number::Float(9_223_372_036_854_775_808.0));
    }

    #[test]
    fn float_operand_yields_float() {
        let sum = Number::Float(0.5) + Number::ONE;
        assert!(!sum.is_int());
        assert_eq!(sum, Number::Float(1.5));
    }

    #[test]
    fn equality_is_numeric() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert_ne!(Number::Int(2), Number::Float(2.5));
    }

    #[test]
    fn equality_is_transitive_above_f64_precision() {
        let a = Number::Int((1 << 53) + 1);
        let b = Number::Float(9_007_199_254_740_992.0);
        let c = Number::Int(1 << 53);

        assert_ne!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn equality_at_i64_bounds() {
        assert_eq!(Number::Int(i64::MIN), Number::Float(-9_223_372_036_854_775_808.0));
        assert_ne!(Number::Int(i64::MAX), Number::Float(9_223_372_036_854_775_808.0));
    }

    #[test]
    fn non_finite_never_equals_int() {
        assert_ne!(Number::Float(f64::NAN), Number::Int(0));
        assert_ne!(Number::Int(i64::MAX), Number::Float(f64::INFINITY));
        assert!(!Number::Float(f64::NAN).is_finite());
        assert!(Number::Float(1.5).is_finite());
        assert!(Number::Int(i64::MIN).is_finite());
    }

    #[test]
    fn parse_integers() {
        assert_eq!("1".parse::<Number>().unwrap(), Number::Int(1));
        assert_eq!("-17".parse::<Number>().unwrap(), Number::Int(-17));
        assert_eq!("+4".parse::<Number>().unwrap(), Number::Int(4));
        assert!("42".parse::<Number>().unwrap().is_int());
    }

    #[test]
    fn parse_floats() {
        assert_eq!("1.5".parse::<Number>().unwrap(), Number::Float(1.5));
        assert_eq!("-2e3".parse::<Number>().unwrap(), Number::Float(-2000.0));
        assert_eq!(".25".parse::<Number>().unwrap(), Number::Float(0.25));
    }

    #[test]
    fn parse_wide_integer_falls_back_to_float() {
        let n = "99999999999999999999".parse::<Number>().unwrap();
        assert!(!n.is_int());
        assert_eq!(n, Number::Float(1e20));
    }

    #[test]
    fn parse_rejects_empty() {
        let err = "".parse::<Number>().unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Empty);
    }

    #[test]
    fn parse_rejects_words_and_specials() {
        for input in ["abc", "NaN", "inf", "-infinity", " 1", "1 ", "1,5", "0x10"] {
            let err = input.parse::<Number>().unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::Invalid, "input {input:?}");
        }
    }

    #[test]
    fn parse_rejects_malformed_digits() {
        for input in ["1e", "1.2.3", "--1", "1-"] {
            assert!(input.parse::<Number>().is_err(), "input {input:?}");
        }
    }

    #[test]
    fn parse_rejects_overflow_to_infinity() {
        let err = "1e400".parse::<Number>().unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::NonFinite);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Number::Int(-3).to_string(), "-3");
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn serde_untagged() {
        let n: Number = serde_json::from_str("7").unwrap();
        assert!(n.is_int());
        let n: Number = serde_json::from_str("7.5").unwrap();
        assert_eq!(n, Number::Float(7.5));
        assert_eq!(serde_json::to_string(&Number::Int(3)).unwrap(), "3");
    }

    proptest! {
        #[test]
        fn int_display_parses_back(x in any::<i64>()) {
            let parsed: Number = Number::Int(x).to_string().parse().unwrap();
            prop_assert!(parsed.is_int());
            prop_assert_eq!(parsed, Number::Int(x));
        }

        #[test]
        fn float_display_parses_back(x in -1e15f64..1e15f64) {
            let parsed: Number = Number::Float(x).to_string().parse().unwrap();
            prop_assert_eq!(parsed, Number::Float(x));
        }

        #[test]
        fn mixed_equality_is_transitive(i in any::<i64>(), j in any::<i64>()) {
            #[allow(clippy::cast_precision_loss)]
            let f = Number::Float(i as f64);
            let (a, b) = (Number::Int(i), Number::Int(j));
            if a == f && f == b {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn addition_matches_float_sum(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            prop_assert_eq!(Number::Int(a) + Number::Int(b), Number::Int(a + b));
        }
    }
}
