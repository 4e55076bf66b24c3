use uom::si::{f64::VolumeRate, volume_rate::liter_per_minute};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::super::{Field, InputError};

/// Validated bracket for the minimum-flow search.
///
/// Both bounds are finite and strictly positive, and `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FlowRange {
    min: Constrained<VolumeRate, StrictlyPositive>,
    max: Constrained<VolumeRate, StrictlyPositive>,
}

impl FlowRange {
    /// Checks `min` first, then `max` against `min`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidRange`] tagged [`Field::FlowMin`] when the
    /// lower bound is not finite and positive, or [`Field::FlowMax`] when the
    /// upper bound is not finite or does not exceed the lower one.
    pub(super) fn new(min: VolumeRate, max: VolumeRate) -> Result<Self, InputError> {
        let min_lpm = min.get::<liter_per_minute>();
        let max_lpm = max.get::<liter_per_minute>();
        let invalid = |field| InputError::InvalidRange {
            field,
            min_lpm,
            max_lpm,
        };

        let min = StrictlyPositive::new(min)
            .ok()
            .filter(|_| min_lpm.is_finite())
            .ok_or_else(|| invalid(Field::FlowMin))?;
        if !(max_lpm.is_finite() && max_lpm > min_lpm) {
            return Err(invalid(Field::FlowMax));
        }
        let max = StrictlyPositive::new(max).map_err(|_| invalid(Field::FlowMax))?;

        Ok(Self { min, max })
    }

    pub(super) fn min(&self) -> Constrained<VolumeRate, StrictlyPositive> {
        self.min
    }

    pub(super) fn max(&self) -> Constrained<VolumeRate, StrictlyPositive> {
        self.max
    }

    /// Bisection bracket in L/min.
    pub(super) fn bracket_lpm(&self) -> [f64; 2] {
        [
            self.min.as_ref().get::<liter_per_minute>(),
            self.max.as_ref().get::<liter_per_minute>(),
        ]
    }
}
