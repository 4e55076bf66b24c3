use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintResult, check_sign};

/// Accepts only values above zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Shorthand for `Constrained::<T, StrictlyPositive>::new`.
    ///
    /// # Errors
    ///
    /// Fails if `value` is zero, negative or NaN.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> ConstraintResult<()> {
        check_sign(value, false)
    }
}
