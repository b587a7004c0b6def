//! Built-in adapters for the variants in `opd-operand`

use crate::error::AdaptError;
use crate::raw::RawValue;
use opd_capability::{BoxedOperand, Number, ParseError, ParseErrorKind};
use opd_operand::{NumericOperand, TextNumericOperand};

/// Tag for [`NumericOperand`]
pub const NUMERIC: &str = "numeric";

/// Tag for [`TextNumericOperand`]
pub const TEXT: &str = "text";

/// Adapt into a [`NumericOperand`]
///
/// Finite numbers pass through; text is parsed.
///
/// # Errors
/// Returns [`AdaptError::Parse`] for non-numeric text or a NaN/infinite number
pub fn numeric(raw: &RawValue) -> Result<BoxedOperand, AdaptError> {
    let value = match raw {
        RawValue::Number(n) => finite(*n)?,
        RawValue::Text(s) => s.parse::<Number>()?,
    };
    Ok(Box::new(NumericOperand::new(value)))
}

/// Adapt into a [`TextNumericOperand`]
///
/// Text is validated; numbers are rendered to their literal form first.
///
/// # Errors
/// Returns [`AdaptError::Parse`] for non-numeric text or a NaN/infinite number
pub fn text(raw: &RawValue) -> Result<BoxedOperand, AdaptError> {
    let operand = match raw {
        RawValue::Text(s) => TextNumericOperand::parse(s.as_str())?,
        RawValue::Number(n) => TextNumericOperand::parse(finite(*n)?.to_string())?,
    };
    Ok(Box::new(operand))
}

fn finite(n: Number) -> Result<Number, ParseError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ParseError::new(n.to_string(), ParseErrorKind::NonFinite))
    }
}
