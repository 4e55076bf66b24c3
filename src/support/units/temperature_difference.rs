use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Subtraction of absolute temperatures that yields an interval.
///
/// In [`uom`], `a - b` on two [`ThermodynamicTemperature`] values is itself
/// an absolute temperature ([uom#380](https://github.com/iliekturtles/uom/issues/380)).
/// Ceiling margins and optimizer residuals need a [`TemperatureInterval`].
pub trait TemperatureDifference {
    /// Returns `self - other` as an interval.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        let kelvins = self.get::<kelvin>() - other.get::<kelvin>();
        TemperatureInterval::new::<delta_kelvin>(kelvins)
    }
}
