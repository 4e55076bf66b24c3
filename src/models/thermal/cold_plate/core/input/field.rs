use std::fmt;

/// Identifies an input field in validation errors.
///
/// [`Field::name`] returns the stable, unit-suffixed name used by callers
/// that exchange operating points as plain data (e.g. `heat_load_w`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    HeatLoad,
    FlowRate,
    InletTemperature,
    AmbientTemperature,
    JunctionToCase,
    Tim,
    Coolant,
    ChannelCount,
    HydraulicDiameter,
    ChannelLength,
    ChannelWidth,
    BaseThickness,
    ContactArea,
    BaseConductivity,
    TargetJunctionTemperature,
    FlowMin,
    FlowMax,
}

impl Field {
    /// Returns the external name of this field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HeatLoad => "heat_load_w",
            Self::FlowRate => "flow_rate_lpm",
            Self::InletTemperature => "inlet_temp_c",
            Self::AmbientTemperature => "ambient_temp_c",
            Self::JunctionToCase => "r_jc_k_per_w",
            Self::Tim => "r_tim_k_per_w",
            Self::Coolant => "coolant",
            Self::ChannelCount => "geometry.channel_count",
            Self::HydraulicDiameter => "geometry.hydraulic_diameter_m",
            Self::ChannelLength => "geometry.channel_length_m",
            Self::ChannelWidth => "geometry.channel_width_m",
            Self::BaseThickness => "geometry.base_thickness_m",
            Self::ContactArea => "geometry.contact_area_m2",
            Self::BaseConductivity => "geometry.copper_k_w_mk",
            Self::TargetJunctionTemperature => "max_junction_temp_c",
            Self::FlowMin => "flow_min_lpm",
            Self::FlowMax => "flow_max_lpm",
        }
    }

    /// Returns true if this field belongs to the cold plate geometry.
    #[must_use]
    pub fn is_geometry(self) -> bool {
        matches!(
            self,
            Self::ChannelCount
                | Self::HydraulicDiameter
                | Self::ChannelLength
                | Self::ChannelWidth
                | Self::BaseThickness
                | Self::ContactArea
                | Self::BaseConductivity
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
