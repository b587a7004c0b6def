//! Raw boundary input

use opd_capability::Number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Untyped value arriving from outside the core
///
/// Deserializes untagged, so JSON `1` is a number and `"1"` is text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Already numeric
    Number(Number),

    /// Text that may or may not hold a literal
    Text(String),
}

/// Shape of a [`RawValue`], used to pick a default variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKind {
    /// [`RawValue::Number`]
    Number,

    /// [`RawValue::Text`]
    Text,
}

impl RawValue {
    /// Shape of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> RawKind {
        match self {
            Self::Number(_) => RawKind::Number,
            Self::Text(_) => RawKind::Text,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<Number> for RawValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
