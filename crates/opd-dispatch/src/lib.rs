//! OPD Dispatcher
//!
//! The single consumer-facing operation of the core.
//!
//! [`increment`] accepts anything implementing
//! [`Capability`](opd_capability::Capability) and delegates to that value's own
//! `combine`. It never inspects which concrete type it was given, and this
//! crate depends on the capability interface alone, so new operand variants
//! work here without a change to this file.
//!
//! # Example
//!
//! ```rust
//! use opd_capability::{Capability, Number};
//! use opd_dispatch::increment;
//!
//! struct Seven;
//!
//! impl Capability for Seven {
//!     fn combine(&self, increment: Number) -> Number {
//!         Number::Int(7) + increment
//!     }
//! }
//!
//! assert_eq!(increment(&Seven), Number::Int(8));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use opd_capability::{Capability, Number};

/// Increment an operand by one
///
/// Works for concrete types (static dispatch) and for `dyn Capability`
/// (dynamic dispatch). The operand is only borrowed.
#[inline]
pub fn increment<O>(operand: &O) -> Number
where
    O: Capability + ?Sized,
{
    operand.combine(Number::ONE)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
