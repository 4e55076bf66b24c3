use uom::si::f64::{Area, Length, Velocity, VolumeRate};

use super::{CoolantProperties, OperatingPoint};

/// Channel-level flow quantities derived from a total flow rate.
///
/// Flow splits evenly across the parallel channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowDerivation {
    /// Flow through the whole plate.
    pub total_flow: VolumeRate,
    /// Flow through each channel.
    pub per_channel_flow: VolumeRate,
    /// Cross-section of one channel.
    pub flow_area: Area,
    /// Mean channel velocity.
    pub velocity: Velocity,
    /// Convective area of all channels together.
    pub wetted_area: Area,
    /// Channel hydraulic diameter, carried for the Reynolds number.
    pub hydraulic_diameter: Length,
}

impl FlowDerivation {
    /// Derives channel flow quantities for the flow and geometry of `point`.
    ///
    /// An [`OperatingPoint`] only holds a strictly positive flow and a
    /// validated geometry, so every quantity here is positive and finite.
    #[must_use]
    pub fn derive(point: &OperatingPoint) -> Self {
        let geometry = point.geometry();
        let total_flow = point.flow_rate();
        let per_channel_flow = total_flow / f64::from(geometry.channel_count());
        let flow_area = geometry.channel_flow_area();

        Self {
            total_flow,
            per_channel_flow,
            flow_area,
            velocity: per_channel_flow / flow_area,
            wetted_area: geometry.wetted_area(),
            hydraulic_diameter: geometry.hydraulic_diameter(),
        }
    }

    /// Returns the channel Reynolds number, `ρ·v·Dh/μ`.
    #[must_use]
    pub fn reynolds(&self, coolant: &CoolantProperties) -> f64 {
        (coolant.density * self.velocity * self.hydraulic_diameter / coolant.dynamic_viscosity)
            .value
    }
}
