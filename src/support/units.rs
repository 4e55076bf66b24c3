//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, power).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use coldplate_models::support::units::TemperatureDifference;
//!
//! let junction = ThermodynamicTemperature::new::<degree_celsius>(71.0);
//! let inlet = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let rise = junction.minus(inlet);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! ## Thermal resistance
//!
//! [`uom`] has no thermal resistance quantity, so [`ThermalResistance`] is
//! defined here with K/W as its SI unit. Values are created and read back
//! through the [`KelvinPerWatt`] extension trait:
//!
//! ```
//! use coldplate_models::support::units::{KelvinPerWatt, ThermalResistance};
//!
//! let r_jc = ThermalResistance::from_kelvin_per_watt(0.04);
//! assert_eq!(r_jc.kelvin_per_watt(), 0.04);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{KelvinPerWatt, ThermalResistance};
pub use temperature_difference::TemperatureDifference;
