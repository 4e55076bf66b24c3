use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermalConductivity, ThermodynamicTemperature, VolumeRate},
    length::millimeter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

use super::{Analysis, ColdPlateModel, Geometry, InputError, OperatingPoint};

pub(crate) fn lpm(value: f64) -> VolumeRate {
    VolumeRate::new::<liter_per_minute>(value)
}

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// The default plate with water at `flow_lpm`.
pub(crate) fn water_at(flow_lpm: f64) -> OperatingPoint {
    OperatingPoint::default()
        .with_flow_rate(lpm(flow_lpm))
        .expect("flow should be positive")
}

pub(crate) fn analyze(point: &OperatingPoint) -> Analysis {
    ColdPlateModel::default()
        .analyze(point)
        .expect("analysis should succeed")
}

/// Raw plate dimensions, defaulting to the reference plate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlateDims {
    pub(crate) channel_count: u32,
    pub(crate) hydraulic_diameter_mm: f64,
    pub(crate) channel_length_mm: f64,
    pub(crate) channel_width_mm: f64,
    pub(crate) base_thickness_mm: f64,
    pub(crate) contact_area_m2: f64,
    pub(crate) base_conductivity: f64,
}

impl Default for PlateDims {
    fn default() -> Self {
        Self {
            channel_count: 40,
            hydraulic_diameter_mm: 1.0,
            channel_length_mm: 80.0,
            channel_width_mm: 1.0,
            base_thickness_mm: 2.0,
            contact_area_m2: 0.01,
            base_conductivity: 385.0,
        }
    }
}

impl PlateDims {
    pub(crate) fn build(&self) -> Result<Geometry, InputError> {
        Geometry::new(
            self.channel_count,
            Length::new::<millimeter>(self.hydraulic_diameter_mm),
            Length::new::<millimeter>(self.channel_length_mm),
            Length::new::<millimeter>(self.channel_width_mm),
            Length::new::<millimeter>(self.base_thickness_mm),
            Area::new::<square_meter>(self.contact_area_m2),
            ThermalConductivity::new::<watt_per_meter_kelvin>(self.base_conductivity),
        )
    }
}
