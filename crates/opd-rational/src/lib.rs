//! OPD Rational Variant
//!
//! An operand variant shipped as its own crate. It implements
//! [`Capability`](opd_capability::Capability) and plugs itself into a
//! [`RegistryBuilder`] without any change to the dispatcher, the registry
//! crate, or the built-in variants.
//!
//! # Example
//!
//! ```rust
//! use opd_capability::Number;
//! use opd_registry::{RawValue, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::with_defaults();
//! opd_rational::register(&mut builder).unwrap();
//! let registry = builder.build();
//!
//! let operand = registry.adapt("rational", &RawValue::from("3/4")).unwrap();
//! assert_eq!(opd_dispatch::increment(operand.as_ref()), Number::Float(1.75));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod rational;

pub use rational::RationalOperand;

use opd_capability::{BoxedOperand, Number};
use opd_registry::{AdaptError, RawValue, RegistryBuilder, RegistryError};

/// Registry tag for [`RationalOperand`]
pub const TAG: &str = "rational";

/// Register the rational variant under [`TAG`]
///
/// # Errors
/// Returns [`RegistryError::DuplicateVariant`] if [`TAG`] is already taken
pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register(TAG, adapt)?;
    Ok(())
}

/// Adapt raw input into a [`RationalOperand`]
///
/// Text is parsed as `"a/b"` or `"a"`; integers become `a/1`.
///
/// # Errors
/// - [`AdaptError::Parse`] for malformed fractions
/// - [`AdaptError::Rejected`] for floating point input
pub fn adapt(raw: &RawValue) -> Result<BoxedOperand, AdaptError> {
    let operand = match raw {
        RawValue::Text(s) => s.parse::<RationalOperand>()?,
        RawValue::Number(Number::Int(i)) => RationalOperand::from(*i),
        RawValue::Number(Number::Float(_)) => {
            return Err(AdaptError::rejected(
                TAG,
                "floating point input has no exact fraction",
            ))
        }
    };
    Ok(Box::new(operand))
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
