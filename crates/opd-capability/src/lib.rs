//! OPD Capability Interface
//!
//! The contract every operand variant satisfies before it can be dispatched.
//!
//! # Core Concepts
//!
//! - [`Capability`]: Single-operation trait, `combine(increment) -> Number`
//! - [`Number`]: Numeric domain shared by every variant
//! - [`ParseError`]: Raised when boundary text is not a numeric literal
//! - [`UnsupportedOperand`]: Raised when boundary input names an unknown variant
//!
//! Nothing in this crate knows about concrete variants. Variant crates and the
//! dispatcher both depend on it; neither depends on the other.
//!
//! # Example
//!
//! ```rust
//! use opd_capability::{Capability, Number};
//!
//! #[derive(Debug)]
//! struct Fixed(i64);
//!
//! impl Capability for Fixed {
//!     fn combine(&self, increment: Number) -> Number {
//!         Number::Int(self.0) + increment
//!     }
//! }
//!
//! assert_eq!(Fixed(41).combine(Number::ONE), Number::Int(42));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod capability;
mod error;
mod number;

// Re-exports
pub use capability::{BoxedOperand, Capability};
pub use error::{ParseError, ParseErrorKind, UnsupportedOperand};
pub use number::Number;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
