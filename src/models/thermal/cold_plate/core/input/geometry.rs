use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermalConductivity},
    length::millimeter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::super::error::InputError;
use super::Field;

/// Microchannel cold plate geometry.
///
/// The plate carries `channel_count` identical rectangular channels in
/// parallel, machined into a copper base of thickness `base_thickness` that
/// sits on a heat source of footprint `contact_area`.
///
/// The channel count and every dimension are guaranteed to be strictly
/// positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    channel_count: u32,
    hydraulic_diameter: Length,
    channel_length: Length,
    channel_width: Length,
    base_thickness: Length,
    contact_area: Area,
    base_conductivity: ThermalConductivity,
}

impl Default for Geometry {
    /// A 40-channel copper plate with 1 mm square channels, 80 mm long.
    fn default() -> Self {
        Self::new_unchecked(
            40,
            Length::new::<millimeter>(1.0),
            Length::new::<millimeter>(80.0),
            Length::new::<millimeter>(1.0),
            Length::new::<millimeter>(2.0),
            Area::new::<square_meter>(0.01),
            ThermalConductivity::new::<watt_per_meter_kelvin>(385.0),
        )
    }
}

impl Geometry {
    /// Constructs a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidGeometry`] or [`InputError::NotFinite`]
    /// naming the first offending field.
    pub fn new(
        channel_count: u32,
        hydraulic_diameter: Length,
        channel_length: Length,
        channel_width: Length,
        base_thickness: Length,
        contact_area: Area,
        base_conductivity: ThermalConductivity,
    ) -> Result<Self, InputError> {
        let channel_count = Constrained::new(channel_count)
            .map_err(|source| InputError::violation(Field::ChannelCount, source))?;

        Ok(Self::from_constrained(
            channel_count,
            InputError::constrain(Field::HydraulicDiameter, hydraulic_diameter)?,
            InputError::constrain(Field::ChannelLength, channel_length)?,
            InputError::constrain(Field::ChannelWidth, channel_width)?,
            InputError::constrain(Field::BaseThickness, base_thickness)?,
            InputError::constrain(Field::ContactArea, contact_area)?,
            InputError::constrain(Field::BaseConductivity, base_conductivity)?,
        ))
    }

    /// Constructs a geometry from pre-validated values.
    ///
    /// Finiteness is not part of [`StrictlyPositive`]; the caller vouches for it.
    #[must_use]
    pub fn from_constrained(
        channel_count: Constrained<u32, StrictlyPositive>,
        hydraulic_diameter: Constrained<Length, StrictlyPositive>,
        channel_length: Constrained<Length, StrictlyPositive>,
        channel_width: Constrained<Length, StrictlyPositive>,
        base_thickness: Constrained<Length, StrictlyPositive>,
        contact_area: Constrained<Area, StrictlyPositive>,
        base_conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    ) -> Self {
        Self {
            channel_count: channel_count.into_inner(),
            hydraulic_diameter: hydraulic_diameter.into_inner(),
            channel_length: channel_length.into_inner(),
            channel_width: channel_width.into_inner(),
            base_thickness: base_thickness.into_inner(),
            contact_area: contact_area.into_inner(),
            base_conductivity: base_conductivity.into_inner(),
        }
    }

    /// Constructs a geometry without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure every value is finite and strictly positive.
    /// Otherwise an analysis fails with a non-physical result.
    #[must_use]
    pub fn new_unchecked(
        channel_count: u32,
        hydraulic_diameter: Length,
        channel_length: Length,
        channel_width: Length,
        base_thickness: Length,
        contact_area: Area,
        base_conductivity: ThermalConductivity,
    ) -> Self {
        Self {
            channel_count,
            hydraulic_diameter,
            channel_length,
            channel_width,
            base_thickness,
            contact_area,
            base_conductivity,
        }
    }

    #[must_use]
    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    /// Channel hydraulic diameter, also taken as the channel depth.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        self.hydraulic_diameter
    }

    #[must_use]
    pub fn channel_length(&self) -> Length {
        self.channel_length
    }

    #[must_use]
    pub fn channel_width(&self) -> Length {
        self.channel_width
    }

    /// Copper thickness between the heat source and the channels.
    #[must_use]
    pub fn base_thickness(&self) -> Length {
        self.base_thickness
    }

    /// Footprint of the heat source on the base.
    #[must_use]
    pub fn contact_area(&self) -> Area {
        self.contact_area
    }

    #[must_use]
    pub fn base_conductivity(&self) -> ThermalConductivity {
        self.base_conductivity
    }

    /// Cross-sectional flow area of one channel, `width × Dh`.
    #[must_use]
    pub fn channel_flow_area(&self) -> Area {
        self.channel_width * self.hydraulic_diameter
    }

    /// Wetted perimeter of one channel, `2·(width + Dh)`.
    ///
    /// This is the perimeter of the same rectangle used by
    /// [`channel_flow_area`](Self::channel_flow_area).
    #[must_use]
    pub fn channel_perimeter(&self) -> Length {
        2.0 * (self.channel_width + self.hydraulic_diameter)
    }

    /// Total convective area of all channels.
    #[must_use]
    pub fn wetted_area(&self) -> Area {
        f64::from(self.channel_count) * self.channel_perimeter() * self.channel_length
    }
}
