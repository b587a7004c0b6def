//! Fraction-backed operand

use opd_capability::{Capability, Number, ParseError, ParseErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operand holding an exact fraction
///
/// Always stored in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RationalOperand {
    numer: i64,
    denom: i64,
}

impl RationalOperand {
    /// Create reduced fraction `numer / denom`
    ///
    /// # Errors
    /// - [`ParseErrorKind::ZeroDenominator`] if `denom` is zero
    /// - [`ParseErrorKind::Invalid`] if the reduced form does not fit in `i64`
    pub fn new(numer: i64, denom: i64) -> Result<Self, ParseError> {
        if denom == 0 {
            return Err(ParseError::new(
                format!("{numer}/{denom}"),
                ParseErrorKind::ZeroDenominator,
            ));
        }

        let g = i128::from(gcd(numer.unsigned_abs(), denom.unsigned_abs()));
        let (mut n, mut d) = (i128::from(numer) / g, i128::from(denom) / g);
        if d < 0 {
            n = -n;
            d = -d;
        }

        // Only i64::MIN over a negative denominator can overflow here.
        match (i64::try_from(n), i64::try_from(d)) {
            (Ok(numer), Ok(denom)) => Ok(Self { numer, denom }),
            _ => Err(ParseError::new(
                format!("{numer}/{denom}"),
                ParseErrorKind::Invalid,
            )),
        }
    }

    /// Numerator in lowest terms
    #[inline]
    #[must_use]
    pub fn numer(&self) -> i64 {
        self.numer
    }

    /// Positive denominator in lowest terms
    #[inline]
    #[must_use]
    pub fn denom(&self) -> i64 {
        self.denom
    }

    /// Approximate value
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl Capability for RationalOperand {
    fn combine(&self, increment: Number) -> Number {
        match increment {
            Number::Int(k) if self.denom == 1 => Number::Int(self.numer) + Number::Int(k),
            _ => Number::Float(self.to_f64()) + increment,
        }
    }
}

impl From<i64> for RationalOperand {
    fn from(value: i64) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }
}

impl FromStr for RationalOperand {
    type Err = ParseError;

    /// Parse `"a/b"` or a bare integer `"a"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::new(s, ParseErrorKind::Empty));
        }

        let (numer, denom) = s.split_once('/').unwrap_or((s, "1"));
        let invalid = |_| ParseError::new(s, ParseErrorKind::Invalid);
        let numer = numer.parse::<i64>().map_err(invalid)?;
        let denom = denom.parse::<i64>().map_err(invalid)?;

        Self::new(numer, denom).map_err(|err| ParseError::new(s, err.kind()))
    }
}

impl TryFrom<String> for RationalOperand {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RationalOperand> for String {
    fn from(operand: RationalOperand) -> Self {
        operand.to_string()
    }
}

impl fmt::Display for RationalOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
