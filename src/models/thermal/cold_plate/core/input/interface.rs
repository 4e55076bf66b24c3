use crate::support::{
    constraint::{Constrained, NonNegative},
    units::{KelvinPerWatt, ThermalResistance},
};

use super::super::error::InputError;
use super::Field;

/// Package resistances between the junction and the cold plate base.
///
/// Both are guaranteed to be non-negative and finite. Zero models an ideal
/// joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceResistances {
    junction_to_case: ThermalResistance,
    tim: ThermalResistance,
}

impl Default for InterfaceResistances {
    /// 0.04 K/W junction-to-case and 0.02 K/W across the TIM.
    fn default() -> Self {
        Self::new_unchecked(
            ThermalResistance::from_kelvin_per_watt(0.04),
            ThermalResistance::from_kelvin_per_watt(0.02),
        )
    }
}

impl InterfaceResistances {
    /// Constructs validated interface resistances.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] or [`InputError::NotFinite`] naming
    /// the offending resistance.
    pub fn new(
        junction_to_case: ThermalResistance,
        tim: ThermalResistance,
    ) -> Result<Self, InputError> {
        Ok(Self::from_constrained(
            InputError::constrain(Field::JunctionToCase, junction_to_case)?,
            InputError::constrain(Field::Tim, tim)?,
        ))
    }

    /// Constructs interface resistances from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        junction_to_case: Constrained<ThermalResistance, NonNegative>,
        tim: Constrained<ThermalResistance, NonNegative>,
    ) -> Self {
        Self {
            junction_to_case: junction_to_case.into_inner(),
            tim: tim.into_inner(),
        }
    }

    /// Constructs interface resistances without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both resistances are non-negative and finite.
    /// Otherwise an analysis fails with a non-physical result.
    #[must_use]
    pub fn new_unchecked(junction_to_case: ThermalResistance, tim: ThermalResistance) -> Self {
        Self {
            junction_to_case,
            tim,
        }
    }

    #[must_use]
    pub fn junction_to_case(&self) -> ThermalResistance {
        self.junction_to_case
    }

    /// Resistance of the thermal interface material layer.
    #[must_use]
    pub fn tim(&self) -> ThermalResistance {
        self.tim
    }
}
