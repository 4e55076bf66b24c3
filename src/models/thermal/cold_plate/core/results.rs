use uom::si::f64::{
    HeatTransfer, MassRate, Power, Pressure, TemperatureInterval, ThermodynamicTemperature,
    Velocity, VolumeRate,
};

use super::{Regime, Resistances, Warning};

/// Thermal and hydraulic results for a single operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Identifier of the coolant analysed.
    pub coolant: String,
    pub flow_rate: VolumeRate,
    pub mass_flow: MassRate,
    /// Mean velocity in one channel.
    pub velocity: Velocity,
    pub reynolds: f64,
    pub prandtl: f64,
    pub regime: Regime,
    pub nusselt: f64,
    /// Darcy friction factor.
    pub friction_factor: f64,
    pub heat_transfer_coefficient: HeatTransfer,
    pub resistances: Resistances,
    /// Bulk coolant temperature rise from inlet to outlet.
    pub coolant_rise: TemperatureInterval,
    pub junction_temperature: ThermodynamicTemperature,
    pub pressure_drop: Pressure,
    pub pump_power: Power,
    pub warnings: Vec<Warning>,
}

impl Analysis {
    /// Returns the coolant outlet temperature for the given inlet temperature.
    #[must_use]
    pub fn outlet_temperature(&self, inlet: ThermodynamicTemperature) -> ThermodynamicTemperature {
        inlet + self.coolant_rise
    }
}
