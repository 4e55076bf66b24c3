use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintResult, check_sign};

/// Accepts zero and anything above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Shorthand for `Constrained::<T, NonNegative>::new`.
    ///
    /// # Errors
    ///
    /// Fails if `value` is negative or NaN.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> ConstraintResult<()> {
        check_sign(value, true)
    }
}
