//! Process-wide operand registry
//!
//! Installed once at start-up; read without synchronization afterwards.

use crate::error::RegistryError;
use crate::registry::OperandRegistry;
use once_cell::sync::OnceCell;

static GLOBAL: OnceCell<OperandRegistry> = OnceCell::new();

/// Install the process-wide registry
///
/// # Errors
/// Returns [`RegistryError::AlreadyInstalled`] on every call after the first
pub fn install(registry: OperandRegistry) -> Result<&'static OperandRegistry, RegistryError> {
    match GLOBAL.try_insert(registry) {
        Ok(installed) => {
            tracing::debug!(tags = ?installed.tags(), "global operand registry installed");
            Ok(installed)
        }
        Err(_) => Err(RegistryError::AlreadyInstalled),
    }
}

/// Process-wide registry, if one was installed
#[inline]
#[must_use]
pub fn global() -> Option<&'static OperandRegistry> {
    GLOBAL.get()
}
