//! OPD Operand Variants
//!
//! Built-in implementations of [`Capability`](opd_capability::Capability).
//!
//! # Core Concepts
//!
//! - [`NumericOperand`]: Wraps a [`Number`](opd_capability::Number) directly
//! - [`TextNumericOperand`]: Wraps text validated as a numeric literal at construction
//!
//! Each variant lives in its own module and knows nothing about the others or
//! about the dispatcher. New variants belong in new crates, not here.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod numeric;
mod text;

// Re-exports
pub use numeric::NumericOperand;
pub use text::TextNumericOperand;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
