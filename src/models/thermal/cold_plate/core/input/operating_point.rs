use uom::si::{
    f64::{Power, ThermodynamicTemperature, VolumeRate},
    power::watt,
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::super::error::InputError;
use super::{Field, Geometry, InterfaceResistances};

/// Accepted coolant inlet temperatures, in °C.
const INLET_RANGE_C: (f64, f64) = (-20.0, 80.0);

/// Accepted ambient temperatures, in °C.
const AMBIENT_RANGE_C: (f64, f64) = (-40.0, 80.0);

/// Largest accepted excess of ambient over inlet temperature, in K.
const MAX_AMBIENT_EXCESS_K: f64 = 20.0;

/// A single steady-state operating point of a cold plate.
///
/// Every numeric value is validated as it is set, so a constructed point is
/// always analysable apart from its coolant identifier, which can only be
/// resolved against a [`CoolantTable`](super::super::CoolantTable).
///
/// The ambient temperature is carried for callers but does not enter the
/// physics; every resistance path leads to the coolant.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingPoint {
    heat_load: Power,
    flow_rate: VolumeRate,
    inlet_temperature: ThermodynamicTemperature,
    ambient_temperature: ThermodynamicTemperature,
    resistances: InterfaceResistances,
    coolant: String,
    geometry: Geometry,
}

impl Default for OperatingPoint {
    /// 700 W on the default plate, cooled by 8 L/min of water at 25 °C.
    fn default() -> Self {
        Self {
            heat_load: Power::new::<watt>(700.0),
            flow_rate: VolumeRate::new::<liter_per_minute>(8.0),
            inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            resistances: InterfaceResistances::default(),
            coolant: String::from("water"),
            geometry: Geometry::default(),
        }
    }
}

impl OperatingPoint {
    /// Sets the heat dissipated at the junction.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] tagged [`Field::HeatLoad`] unless the load is
    /// finite and strictly positive.
    pub fn with_heat_load(self, heat_load: Power) -> Result<Self, InputError> {
        let heat_load = InputError::constrain(Field::HeatLoad, heat_load)?;
        Ok(self.with_constrained_heat_load(heat_load))
    }

    /// Sets a pre-validated heat load.
    #[must_use]
    pub fn with_constrained_heat_load(
        self,
        heat_load: Constrained<Power, StrictlyPositive>,
    ) -> Self {
        Self {
            heat_load: heat_load.into_inner(),
            ..self
        }
    }

    /// Sets the total coolant flow through the plate.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] tagged [`Field::FlowRate`] unless the flow is
    /// finite and strictly positive.
    pub fn with_flow_rate(self, flow_rate: VolumeRate) -> Result<Self, InputError> {
        let flow_rate = InputError::constrain(Field::FlowRate, flow_rate)?;
        Ok(self.with_constrained_flow_rate(flow_rate))
    }

    /// Sets a pre-validated flow rate.
    #[must_use]
    pub fn with_constrained_flow_rate(
        self,
        flow_rate: Constrained<VolumeRate, StrictlyPositive>,
    ) -> Self {
        Self {
            flow_rate: flow_rate.into_inner(),
            ..self
        }
    }

    /// Sets the coolant inlet and ambient temperatures together.
    ///
    /// The inlet must lie in -20 to 80 °C and the ambient in -40 to 80 °C,
    /// with the ambient at most 20 K above the inlet.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotFinite`] or [`InputError::OutOfRange`] naming
    /// the temperature at fault, or [`InputError::AmbientAboveInlet`].
    pub fn with_temperatures(
        self,
        inlet_temperature: ThermodynamicTemperature,
        ambient_temperature: ThermodynamicTemperature,
    ) -> Result<Self, InputError> {
        let inlet_c = inlet_temperature.get::<degree_celsius>();
        let ambient_c = ambient_temperature.get::<degree_celsius>();
        check_temperature(Field::InletTemperature, inlet_c, INLET_RANGE_C)?;
        check_temperature(Field::AmbientTemperature, ambient_c, AMBIENT_RANGE_C)?;
        if ambient_c - inlet_c > MAX_AMBIENT_EXCESS_K {
            return Err(InputError::AmbientAboveInlet { ambient_c, inlet_c });
        }

        Ok(Self {
            inlet_temperature,
            ambient_temperature,
            ..self
        })
    }

    #[must_use]
    pub fn with_resistances(self, resistances: InterfaceResistances) -> Self {
        Self {
            resistances,
            ..self
        }
    }

    /// Names the coolant, resolved against a coolant table at analysis time.
    #[must_use]
    pub fn with_coolant(self, coolant: impl Into<String>) -> Self {
        Self {
            coolant: coolant.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_geometry(self, geometry: Geometry) -> Self {
        Self { geometry, ..self }
    }

    #[must_use]
    pub fn heat_load(&self) -> Power {
        self.heat_load
    }

    #[must_use]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    #[must_use]
    pub fn inlet_temperature(&self) -> ThermodynamicTemperature {
        self.inlet_temperature
    }

    #[must_use]
    pub fn ambient_temperature(&self) -> ThermodynamicTemperature {
        self.ambient_temperature
    }

    #[must_use]
    pub fn resistances(&self) -> InterfaceResistances {
        self.resistances
    }

    /// Identifier of the coolant in the model's coolant table.
    #[must_use]
    pub fn coolant(&self) -> &str {
        &self.coolant
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

fn check_temperature(field: Field, value: f64, (min, max): (f64, f64)) -> Result<(), InputError> {
    if value.is_infinite() {
        return Err(InputError::NotFinite { field });
    }
    InputError::check_range(field, value, min, max)
}
