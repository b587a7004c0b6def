//! OPD Operand Registry
//!
//! Boundary code that turns raw input into typed operands.
//!
//! # Core Concepts
//!
//! - [`RawValue`]: Untyped input arriving from outside the core
//! - [`RegistryBuilder`]: Append-only registration of variant adapters, done at start-up
//! - [`OperandRegistry`]: Frozen, lock-free lookup table from variant tag to adapter
//! - [`AdapterConfig`]: Boundary behaviour (trimming, default tags), loadable from TOML
//! - [`install`]/[`global`]: Optional process-wide registry
//!
//! The dispatcher never sees this crate. Callers adapt first, then dispatch.
//!
//! # Example
//!
//! ```rust
//! use opd_capability::Number;
//! use opd_registry::{RawValue, RegistryBuilder};
//!
//! let registry = RegistryBuilder::with_defaults().build();
//!
//! let operand = registry.adapt("text", &RawValue::from("1")).unwrap();
//! assert_eq!(opd_dispatch::increment(operand.as_ref()), Number::Int(2));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod adapters;
mod config;
mod error;
mod global;
mod raw;
mod registry;

// Re-exports
pub use config::{AdapterConfig, ConfigError};
pub use error::{AdaptError, RegistryError};
pub use global::{global, install};
pub use raw::{RawKind, RawValue};
pub use registry::{Adapter, OperandRegistry, RegistryBuilder};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
