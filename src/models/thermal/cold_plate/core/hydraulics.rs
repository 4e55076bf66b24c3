use uom::si::{
    f64::{Power, Pressure},
    power::watt,
    pressure::pascal,
};

use super::{AnalysisError, CoolantProperties, FlowDerivation, Geometry};

/// Pump efficiency used to convert hydraulic power into pump power.
///
/// Representative of small centrifugal pumps, not calibrated to any curve.
pub const PUMP_EFFICIENCY: f64 = 0.5;

/// Pressure drop across the plate and the pump power needed to drive it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hydraulics {
    /// Inlet-to-outlet pressure drop across the channels.
    pub pressure_drop: Pressure,
    /// Shaft power at [`PUMP_EFFICIENCY`].
    pub pump_power: Power,
}

impl Hydraulics {
    /// Evaluates Darcy–Weisbach pressure drop for one channel.
    ///
    /// Channels are identical and in parallel, so the per-channel drop is the
    /// plate drop.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NonPhysical`] if the pressure drop or pump
    /// power is negative or not finite.
    pub fn evaluate(
        friction_factor: f64,
        flow: &FlowDerivation,
        geometry: &Geometry,
        coolant: &CoolantProperties,
    ) -> Result<Self, AnalysisError> {
        let length_ratio = (geometry.channel_length() / flow.hydraulic_diameter).value;
        let dynamic_pressure: Pressure = 0.5 * coolant.density * flow.velocity * flow.velocity;

        let pressure_drop = friction_factor * length_ratio * dynamic_pressure;
        AnalysisError::check_physical("pressure drop", pressure_drop.get::<pascal>())?;

        let pump_power: Power = pressure_drop * flow.total_flow / PUMP_EFFICIENCY;
        AnalysisError::check_physical("pump power", pump_power.get::<watt>())?;

        Ok(Self {
            pressure_drop,
            pump_power,
        })
    }
}
