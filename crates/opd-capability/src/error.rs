//! Error types shared by operand variants and boundary adapters

/// Failure to read text as a numeric literal
///
/// Always raised when an operand is constructed, never from
/// [`Capability::combine`](crate::Capability::combine).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {input:?} as a number: {kind}")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    /// Create parse error for `input`
    #[inline]
    #[must_use]
    pub fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Offending input text
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Reasons a literal is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Nothing to parse
    #[error("empty input")]
    Empty,

    /// Not a numeric literal
    #[error("not a numeric literal")]
    Invalid,

    /// Literal overflows to infinity
    #[error("value is not finite")]
    NonFinite,

    /// Fraction with a zero denominator
    #[error("zero denominator")]
    ZeroDenominator,
}

/// Boundary input named an operand variant nobody registered
///
/// Rust rejects values lacking [`Capability`](crate::Capability) at compile
/// time, so this only arises where raw input selects a variant by tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported operand variant: {tag:?}")]
pub struct UnsupportedOperand {
    /// Requested variant tag
    pub tag: String,
}

impl UnsupportedOperand {
    /// Create error for `tag`
    #[inline]
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}
