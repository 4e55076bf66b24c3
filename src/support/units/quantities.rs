use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P3, Z0},
};

/// Thermal resistance, K/W in SI.
///
/// Dimensionally `K·s³/(kg·m²)`, the inverse of
/// [`ThermalConductance`](uom::si::f64::ThermalConductance).
/// Multiplying by a [`Power`](uom::si::f64::Power) yields a
/// [`TemperatureInterval`](uom::si::f64::TemperatureInterval).
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Construction and readout of [`ThermalResistance`] in K/W.
///
/// [`uom`] only generates unit-typed constructors for its own quantities,
/// so this trait stands in for `ThermalResistance::new::<kelvin_per_watt>`.
pub trait KelvinPerWatt {
    /// Creates a thermal resistance from a value in K/W.
    fn from_kelvin_per_watt(value: f64) -> Self;

    /// Returns the thermal resistance in K/W.
    fn kelvin_per_watt(&self) -> f64;
}

impl KelvinPerWatt for ThermalResistance {
    fn from_kelvin_per_watt(value: f64) -> Self {
        // K/W is the coherent SI unit, so the base-unit value is stored as is.
        Self {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn kelvin_per_watt(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, Length, Power, TemperatureInterval, ThermalConductivity},
        length::millimeter,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn heat_flow_through_resistance_gives_temperature_rise() {
        let r = ThermalResistance::from_kelvin_per_watt(0.06);
        let q = Power::new::<watt>(700.0);

        let rise: TemperatureInterval = q * r;

        assert_relative_eq!(rise.get::<delta_kelvin>(), 42.0, epsilon = 1e-12);
    }

    #[test]
    fn slab_conduction_has_resistance_dimensions() {
        let thickness = Length::new::<millimeter>(2.0);
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(385.0);
        let area = Area::new::<square_meter>(0.01);

        let r: ThermalResistance = thickness / (k * area);

        assert_relative_eq!(r.kelvin_per_watt(), 0.002 / 3.85, epsilon = 1e-15);
    }

    #[test]
    fn series_resistances_add() {
        let total = ThermalResistance::from_kelvin_per_watt(0.04)
            + ThermalResistance::from_kelvin_per_watt(0.02);

        assert_relative_eq!(total.kelvin_per_watt(), 0.06, epsilon = 1e-15);
    }
}
