//! Text-encoded numeric operand

use opd_capability::{Capability, Number, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operand wrapping text guaranteed to be a numeric literal
///
/// The literal is validated when the operand is built, so
/// [`combine`](Capability::combine) cannot fail. The parsed value is kept
/// alongside the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TextNumericOperand {
    text: String,
    value: Number,
}

impl TextNumericOperand {
    /// Validate `text` and build the operand
    ///
    /// # Errors
    /// Returns [`ParseError`] if `text` is not a numeric literal
    pub fn parse(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        let value = text.parse::<Number>()?;
        Ok(Self { text, value })
    }

    /// Original text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parsed value
    #[inline]
    #[must_use]
    pub fn value(&self) -> Number {
        self.value
    }
}

impl Capability for TextNumericOperand {
    #[inline]
    fn combine(&self, increment: Number) -> Number {
        self.value + increment
    }
}

impl FromStr for TextNumericOperand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TextNumericOperand {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for TextNumericOperand {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TextNumericOperand> for String {
    fn from(operand: TextNumericOperand) -> Self {
        operand.text
    }
}

impl fmt::Display for TextNumericOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
