use thiserror::Error;
use uom::si::{Dimension, Quantity, Units};

use crate::support::constraint::{Constrained, Constraint, ConstraintError, NonNegative};

use super::input::Field;

/// Errors raised while validating analysis inputs.
///
/// Every variant is raised before any physics runs, so a rejected input never
/// produces a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// An operating point value violates its numeric constraint.
    #[error("invalid {field}: {source}")]
    Invalid {
        field: Field,
        #[source]
        source: ConstraintError,
    },

    /// A geometry dimension violates its numeric constraint.
    #[error("invalid geometry, {field}: {source}")]
    InvalidGeometry {
        field: Field,
        #[source]
        source: ConstraintError,
    },

    /// A value is infinite.
    #[error("{field} must be finite")]
    NotFinite { field: Field },

    /// A value lies outside its accepted range.
    #[error("{field}={value} is outside [{min}, {max}]")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The ambient temperature is implausibly far above the coolant inlet.
    #[error(
        "ambient_temp_c={ambient_c} is unrealistically high relative to inlet_temp_c={inlet_c}"
    )]
    AmbientAboveInlet { ambient_c: f64, inlet_c: f64 },

    /// The coolant identifier is not registered in the coolant table.
    #[error("unknown coolant: {id:?}")]
    UnknownCoolant { id: String },

    /// An optimizer flow bound is not finite and positive, or the bounds are
    /// not ordered. `field` names the bound at fault.
    #[error("invalid flow range, {field}: flow_min_lpm={min_lpm:.3}, flow_max_lpm={max_lpm:.3}")]
    InvalidRange {
        field: Field,
        min_lpm: f64,
        max_lpm: f64,
    },
}

impl InputError {
    /// Returns the offending field, if the error concerns a single field.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Invalid { field, .. }
            | Self::InvalidGeometry { field, .. }
            | Self::NotFinite { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidRange { field, .. } => Some(*field),
            Self::AmbientAboveInlet { .. } => Some(Field::AmbientTemperature),
            Self::UnknownCoolant { .. } => Some(Field::Coolant),
        }
    }

    /// Wraps a finite quantity that satisfies `C`, tagging failures with `field`.
    pub(super) fn constrain<D, U, C>(
        field: Field,
        value: Quantity<D, U, f64>,
    ) -> Result<Constrained<Quantity<D, U, f64>, C>, Self>
    where
        D: Dimension + ?Sized,
        U: Units<f64> + ?Sized,
        C: Constraint<Quantity<D, U, f64>>,
    {
        if value.value.is_infinite() {
            return Err(Self::NotFinite { field });
        }
        Constrained::new(value).map_err(|source| Self::violation(field, source))
    }

    /// Tags a constraint failure with `field`.
    pub(super) fn violation(field: Field, source: ConstraintError) -> Self {
        if field.is_geometry() {
            Self::InvalidGeometry { field, source }
        } else {
            Self::Invalid { field, source }
        }
    }

    /// Checks that a value lies within the closed range `[min, max]`.
    pub(super) fn check_range(field: Field, value: f64, min: f64, max: f64) -> Result<(), Self> {
        if value.is_nan() || value < min || value > max {
            return Err(Self::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

/// Errors that can occur during a cold plate analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The inputs were rejected at the boundary.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A derived quantity came out negative or non-finite.
    ///
    /// Valid inputs never produce this error. It signals a broken invariant in
    /// the model rather than a recoverable condition, so no value is clamped.
    #[error("non-physical {quantity}: {value}")]
    NonPhysical { quantity: &'static str, value: f64 },
}

impl AnalysisError {
    /// Returns `value` if it is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NonPhysical`] naming `quantity` otherwise.
    pub(super) fn check_physical(quantity: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && NonNegative::check(&value).is_ok() {
            Ok(value)
        } else {
            Err(Self::NonPhysical { quantity, value })
        }
    }
}
