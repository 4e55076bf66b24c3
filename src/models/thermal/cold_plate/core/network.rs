use uom::si::{
    f64::{HeatTransfer, MassRate, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{KelvinPerWatt, ThermalResistance};

use super::{AnalysisError, CoolantProperties, FlowDerivation, OperatingPoint};

/// Series thermal resistances from junction to coolant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistances {
    /// Die junction to package case.
    pub junction_to_case: ThermalResistance,
    /// Thermal interface material between case and plate.
    pub tim: ThermalResistance,
    /// Conduction through the copper base, `t / (k·A)`.
    pub base_conduction: ThermalResistance,
    /// Channel wall to bulk coolant, `1 / (h·A_wetted)`.
    pub convection: ThermalResistance,
    /// Sum of the four series resistances.
    pub total: ThermalResistance,
}

/// Thermal state of the junction-to-coolant network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Network {
    pub heat_transfer_coefficient: HeatTransfer,
    pub resistances: Resistances,
    pub mass_flow: MassRate,
    pub coolant_rise: TemperatureInterval,
    pub junction_temperature: ThermodynamicTemperature,
}

impl Network {
    /// Composes the resistance network and solves for junction temperature.
    ///
    /// The convective reference is the mean bulk coolant temperature, halfway
    /// between inlet and outlet, so
    /// `Tj = T_inlet + ΔT_coolant / 2 + Q·R_total`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NonPhysical`] if a resistance, the coolant
    /// rise, or the junction temperature is negative or not finite. Inputs
    /// built through validating constructors never trigger this.
    pub fn compose(
        nusselt: f64,
        flow: &FlowDerivation,
        point: &OperatingPoint,
        coolant: &CoolantProperties,
    ) -> Result<Self, AnalysisError> {
        let geometry = point.geometry();
        let interface = point.resistances();
        let heat_load = point.heat_load();

        let heat_transfer_coefficient: HeatTransfer =
            nusselt * coolant.thermal_conductivity / flow.hydraulic_diameter;

        let convection: ThermalResistance = 1.0 / (heat_transfer_coefficient * flow.wetted_area);
        let base_conduction: ThermalResistance = geometry.base_thickness()
            / (geometry.base_conductivity() * geometry.contact_area());

        let convection = physical_resistance("convection resistance", convection)?;
        let base_conduction = physical_resistance("base conduction resistance", base_conduction)?;
        let junction_to_case =
            physical_resistance("junction-to-case resistance", interface.junction_to_case())?;
        let tim = physical_resistance("TIM resistance", interface.tim())?;
        let total = junction_to_case + tim + base_conduction + convection;

        let mass_flow: MassRate = coolant.density * flow.total_flow;
        let coolant_rise: TemperatureInterval = heat_load / (mass_flow * coolant.specific_heat);
        AnalysisError::check_physical("coolant rise", coolant_rise.get::<delta_kelvin>())?;

        let network_rise: TemperatureInterval = heat_load * total;
        let junction_temperature = point.inlet_temperature() + 0.5 * coolant_rise + network_rise;
        AnalysisError::check_physical(
            "junction temperature",
            junction_temperature.get::<kelvin>(),
        )?;

        Ok(Self {
            heat_transfer_coefficient,
            resistances: Resistances {
                junction_to_case,
                tim,
                base_conduction,
                convection,
                total,
            },
            mass_flow,
            coolant_rise,
            junction_temperature,
        })
    }
}

fn physical_resistance(
    quantity: &'static str,
    resistance: ThermalResistance,
) -> Result<ThermalResistance, AnalysisError> {
    AnalysisError::check_physical(quantity, resistance.kelvin_per_watt())
        .map(ThermalResistance::from_kelvin_per_watt)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Power, heat_transfer::watt_per_square_meter_kelvin, mass_rate::kilogram_per_second,
        power::watt, thermodynamic_temperature::degree_celsius,
    };

    use crate::models::thermal::cold_plate::core::InterfaceResistances;

    fn compose_default(nusselt: f64) -> Network {
        let point = OperatingPoint::default();
        let flow = FlowDerivation::derive(&point);
        Network::compose(nusselt, &flow, &point, &CoolantProperties::water()).unwrap()
    }

    #[test]
    fn resistances_for_laminar_nusselt() {
        let network = compose_default(4.36);

        // h = 4.36 · 0.6 / 1e-3
        assert_relative_eq!(
            network
                .heat_transfer_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            2616.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            network.resistances.convection.kelvin_per_watt(),
            1.0 / (2616.0 * 0.0128),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            network.resistances.base_conduction.kelvin_per_watt(),
            0.002 / (385.0 * 0.01),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            network.resistances.total.kelvin_per_watt(),
            0.04 + 0.02 + 0.002 / 3.85 + 1.0 / (2616.0 * 0.0128),
            max_relative = 1e-12
        );
    }

    #[test]
    fn energy_balance_closes() {
        let network = compose_default(20.0);
        let cp = CoolantProperties::water().specific_heat;

        let absorbed: Power = network.mass_flow * cp * network.coolant_rise;

        assert_relative_eq!(absorbed.get::<watt>(), 700.0, max_relative = 1e-9);
        assert_relative_eq!(
            network.mass_flow.get::<kilogram_per_second>(),
            997.0 * 8.0 / 60_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn junction_uses_mean_bulk_temperature() {
        let network = compose_default(20.0);

        let expected = 25.0
            + 0.5 * network.coolant_rise.get::<delta_kelvin>()
            + 700.0 * network.resistances.total.kelvin_per_watt();

        assert_relative_eq!(
            network.junction_temperature.get::<degree_celsius>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn higher_nusselt_lowers_junction_temperature() {
        let low = compose_default(4.36);
        let high = compose_default(40.0);

        assert!(
            high.junction_temperature.get::<kelvin>() < low.junction_temperature.get::<kelvin>()
        );
        assert_relative_eq!(
            low.coolant_rise.get::<delta_kelvin>(),
            high.coolant_rise.get::<delta_kelvin>()
        );
    }

    #[test]
    fn unchecked_negative_resistance_is_fatal() {
        let point = OperatingPoint::default().with_resistances(InterfaceResistances::new_unchecked(
            ThermalResistance::from_kelvin_per_watt(-0.04),
            ThermalResistance::from_kelvin_per_watt(0.02),
        ));
        let flow = FlowDerivation::derive(&point);

        let result = Network::compose(10.0, &flow, &point, &CoolantProperties::water());

        assert!(matches!(
            result,
            Err(AnalysisError::NonPhysical {
                quantity: "junction-to-case resistance",
                ..
            })
        ));
    }

    #[test]
    fn zero_nusselt_is_fatal() {
        let point = OperatingPoint::default();
        let flow = FlowDerivation::derive(&point);

        assert!(matches!(
            Network::compose(0.0, &flow, &point, &CoolantProperties::water()),
            Err(AnalysisError::NonPhysical {
                quantity: "convection resistance",
                ..
            })
        ));
    }
}
