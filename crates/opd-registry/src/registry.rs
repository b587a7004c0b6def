//! Operand registry
//!
//! Provides [`RegistryBuilder`] for start-up registration and the frozen
//! [`OperandRegistry`] used for lookups.

use crate::adapters;
use crate::config::AdapterConfig;
use crate::error::{AdaptError, RegistryError};
use crate::raw::RawValue;
use indexmap::IndexMap;
use opd_capability::{BoxedOperand, UnsupportedOperand};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Conversion from raw input into one operand variant
pub type Adapter = Arc<dyn Fn(&RawValue) -> Result<BoxedOperand, AdaptError> + Send + Sync>;

/// Append-only builder for an [`OperandRegistry`]
///
/// Registration happens here, before any lookup. Once built, the table is
/// immutable and shared without locks.
#[derive(Default)]
pub struct RegistryBuilder {
    adapters: IndexMap<String, Adapter>,
    config: AdapterConfig,
}

impl RegistryBuilder {
    /// Create new empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create builder with built-in variants (`numeric`, `text`)
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        builder.insert(adapters::NUMERIC, Arc::new(adapters::numeric));
        builder.insert(adapters::TEXT, Arc::new(adapters::text));
        builder
    }

    /// Set boundary configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Register an adapter under `tag`
    ///
    /// # Errors
    /// - [`RegistryError::InvalidTag`] if `tag` is empty or contains whitespace
    /// - [`RegistryError::DuplicateVariant`] if `tag` is already taken
    pub fn register<F>(&mut self, tag: &str, adapter: F) -> Result<&mut Self, RegistryError>
    where
        F: Fn(&RawValue) -> Result<BoxedOperand, AdaptError> + Send + Sync + 'static,
    {
        if tag.is_empty() || tag.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidTag {
                tag: tag.to_string(),
            });
        }
        if self.adapters.contains_key(tag) {
            return Err(RegistryError::DuplicateVariant {
                tag: tag.to_string(),
            });
        }

        self.insert(tag, Arc::new(adapter));
        Ok(self)
    }

    /// Check if tag is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.adapters.contains_key(tag)
    }

    /// Freeze into a registry
    #[must_use]
    pub fn build(self) -> OperandRegistry {
        tracing::debug!(
            variants = self.adapters.len(),
            "operand registry built"
        );
        OperandRegistry {
            inner: Arc::new(Inner {
                adapters: self.adapters,
                config: self.config,
            }),
        }
    }

    fn insert(&mut self, tag: &str, adapter: Adapter) {
        tracing::debug!(tag, "registering operand variant");
        self.adapters.insert(tag.to_string(), adapter);
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("tags", &self.adapters.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

/// Frozen mapping from variant tag to adapter
///
/// Cheap to clone and safe to share across threads; lookups take no locks.
#[derive(Clone)]
pub struct OperandRegistry {
    inner: Arc<Inner>,
}

struct Inner {
    adapters: IndexMap<String, Adapter>,
    config: AdapterConfig,
}

impl OperandRegistry {
    /// Adapt `raw` into the variant registered under `tag`
    ///
    /// # Errors
    /// - [`AdaptError::Unsupported`] if no variant is registered under `tag`
    /// - [`AdaptError::Parse`] / [`AdaptError::Rejected`] from the adapter
    pub fn adapt(&self, tag: &str, raw: &RawValue) -> Result<BoxedOperand, AdaptError> {
        let adapter = self
            .inner
            .adapters
            .get(tag)
            .ok_or_else(|| UnsupportedOperand::new(tag))?;

        let raw = self.normalize(raw);
        tracing::trace!(tag, raw = %raw, "adapting raw value");

        adapter(&*raw).map_err(|err| {
            tracing::warn!(tag, raw = %raw, error = %err, "raw value rejected");
            err
        })
    }

    /// Adapt `raw` using the configured default variant for its shape
    ///
    /// # Errors
    /// Same as [`adapt`](Self::adapt)
    pub fn adapt_auto(&self, raw: &RawValue) -> Result<BoxedOperand, AdaptError> {
        self.adapt(self.inner.config.variant_for(raw.kind()), raw)
    }

    /// Check if tag is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.inner.adapters.contains_key(tag)
    }

    /// Registered tags in registration order
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.inner.adapters.keys().map(String::as_str).collect()
    }

    /// Get number of registered variants
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.adapters.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.adapters.is_empty()
    }

    /// Boundary configuration in effect
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AdapterConfig {
        &self.inner.config
    }

    fn normalize<'a>(&self, raw: &'a RawValue) -> Cow<'a, RawValue> {
        match raw {
            RawValue::Text(s) if self.inner.config.trim_whitespace && s.trim().len() != s.len() => {
                Cow::Owned(RawValue::Text(s.trim().to_string()))
            }
            _ => Cow::Borrowed(raw),
        }
    }
}

impl fmt::Debug for OperandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperandRegistry")
            .field("tags", &self.tags())
            .field("config", &self.inner.config)
            .finish()
    }
}
