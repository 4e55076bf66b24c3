//! Sign constraints for model inputs.
//!
//! Interface resistances are [`NonNegative`], since an ideal joint has none.
//! Heat load, flow, geometry and optimizer bounds are [`StrictlyPositive`].
//!
//! A value that has passed its check is carried as [`Constrained<T, C>`], so
//! input types built from constrained parts never validate twice:
//!
//! ```
//! use coldplate_models::support::constraint::{
//!     Constrained, ConstraintError, NonNegative, StrictlyPositive,
//! };
//! use uom::si::{f64::VolumeRate, volume_rate::liter_per_minute};
//!
//! let flow = StrictlyPositive::new(VolumeRate::new::<liter_per_minute>(8.0)).unwrap();
//! assert!((flow.into_inner().get::<liter_per_minute>() - 8.0).abs() < 1e-12);
//!
//! assert_eq!(
//!     Constrained::<u32, StrictlyPositive>::new(0),
//!     Err(ConstraintError::Zero)
//! );
//! assert!(NonNegative::new(0.0).is_ok());
//! ```
//!
//! Only the sign is checked. Infinite values pass, so callers that need a
//! finite value test for it separately.

mod non_negative;
mod strictly_positive;

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A sign requirement on values of type `T`.
pub trait Constraint<T> {
    /// Checks `value` against the requirement.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how `value` falls short.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy constraint `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] raised by `C`.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Compares `value` with zero, accepting zero only when `zero_allowed`.
fn check_sign<T: PartialOrd + Zero>(value: &T, zero_allowed: bool) -> ConstraintResult<()> {
    match value.partial_cmp(&T::zero()) {
        Some(Ordering::Greater) => Ok(()),
        Some(Ordering::Equal) if zero_allowed => Ok(()),
        Some(Ordering::Equal) => Err(ConstraintError::Zero),
        Some(Ordering::Less) => Err(ConstraintError::Negative),
        None => Err(ConstraintError::NotANumber),
    }
}
