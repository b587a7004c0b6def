//! Error types for the operand registry

use opd_capability::{ParseError, UnsupportedOperand};

/// Failure to turn a raw value into an operand
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdaptError {
    /// Raw text is not a valid literal for the variant
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No adapter registered under the requested tag
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperand),

    /// Adapter does not accept this shape of input
    #[error("variant {tag:?} rejected input: {reason}")]
    Rejected {
        /// Variant tag
        tag: String,
        /// Why it was refused
        reason: String,
    },
}

impl AdaptError {
    /// Create rejection error
    #[inline]
    #[must_use]
    pub fn rejected(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Check if failure came from literal parsing
    #[inline]
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if the variant tag was unknown
    #[inline]
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Failure while registering variants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Tag already taken; registration is append-only
    #[error("variant {tag:?} is already registered")]
    DuplicateVariant {
        /// Conflicting tag
        tag: String,
    },

    /// Tag is empty or contains whitespace
    #[error("invalid variant tag {tag:?}")]
    InvalidTag {
        /// Rejected tag
        tag: String,
    },

    /// Process-wide registry was installed before
    #[error("global operand registry already installed")]
    AlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use opd_capability::ParseErrorKind;

    #[test]
    fn parse_error_converts() {
        let err: AdaptError = ParseError::new("x", ParseErrorKind::Invalid).into();
        assert!(err.is_parse());
        assert!(!err.is_unsupported());
    }

    #[test]
    fn unsupported_converts() {
        let err: AdaptError = UnsupportedOperand::new("complex").into();
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "unsupported operand variant: \"complex\"");
    }

    #[test]
    fn rejected_display() {
        let err = AdaptError::rejected("rational", "floats have no exact fraction");
        assert_eq!(
            err.to_string(),
            "variant \"rational\" rejected input: floats have no exact fraction"
        );
    }

    #[test]
    fn registry_error_display() {
        let err = RegistryError::DuplicateVariant {
            tag: "numeric".to_string(),
        };
        assert_eq!(err.to_string(), "variant \"numeric\" is already registered");
    }
}
