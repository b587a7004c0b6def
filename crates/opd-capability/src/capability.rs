//! Capability trait
//!
//! Provides the [`Capability`] trait: the one operation the dispatcher relies on.

use crate::number::Number;
use std::rc::Rc;
use std::sync::Arc;

/// Behavioral contract for operand variants
///
/// Any type that can be combined with a numeric increment satisfies it. The
/// trait is not sealed: independently compiled crates implement it for their
/// own types without touching this crate or the dispatcher.
///
/// # Contract
/// - `combine` must not mutate the operand; it returns a new value
/// - `combine` must not fail; validation belongs to construction
pub trait Capability {
    /// Combine this operand with `increment`, producing a fresh number
    fn combine(&self, increment: Number) -> Number;
}

/// Type-erased operand produced at the boundary
///
/// `Send + Sync` so adapted operands can be handed across threads.
pub type BoxedOperand = Box<dyn Capability + Send + Sync>;

impl<T: Capability + ?Sized> Capability for &T {
    #[inline]
    fn combine(&self, increment: Number) -> Number {
        (**self).combine(increment)
    }
}

impl<T: Capability + ?Sized> Capability for Box<T> {
    #[inline]
    fn combine(&self, increment: Number) -> Number {
        (**self).combine(increment)
    }
}

impl<T: Capability + ?Sized> Capability for Arc<T> {
    #[inline]
    fn combine(&self, increment: Number) -> Number {
        (**self).combine(increment)
    }
}

impl<T: Capability + ?Sized> Capability for Rc<T> {
    #[inline]
    fn combine(&self, increment: Number) -> Number {
        (**self).combine(increment)
    }
}
