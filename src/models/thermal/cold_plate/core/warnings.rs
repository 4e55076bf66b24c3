//! Advisory checks on a completed analysis.
//!
//! Warnings never block a result. They flag operating points that are valid
//! inputs but fall outside the envelope a designer would normally accept.

use std::fmt;

use uom::si::{
    f64::{Power, Pressure, TemperatureInterval, ThermodynamicTemperature},
    power::watt,
    pressure::{pascal, pound_force_per_square_inch},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::TemperatureDifference;

use super::{Correlation, Hydraulics, Network, OperatingPoint, Regime};

/// An out-of-envelope condition found in an analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// The junction exceeds the rated ceiling.
    JunctionAboveCeiling {
        junction: ThermodynamicTemperature,
        ceiling: ThermodynamicTemperature,
    },
    /// The junction sits within the policy margin below the ceiling.
    JunctionNearCeiling {
        junction: ThermodynamicTemperature,
        ceiling: ThermodynamicTemperature,
    },
    /// The plate consumes more pressure than the loop budget allows.
    PressureDropAboveBudget {
        pressure_drop: Pressure,
        budget: Pressure,
    },
    /// Laminar flow under a heat load large enough to be convection-limited.
    LaminarAtHighLoad { heat_load: Power },
    /// Flow so slow that distribution across channels becomes unreliable.
    LowReynolds { reynolds: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JunctionAboveCeiling { junction, ceiling } => write!(
                f,
                "junction temperature {:.1} °C exceeds {:.1} °C; increase flow rate",
                junction.get::<degree_celsius>(),
                ceiling.get::<degree_celsius>(),
            ),
            Self::JunctionNearCeiling { junction, ceiling } => write!(
                f,
                "junction temperature {:.1} °C is within {:.1} K of the {:.1} °C limit",
                junction.get::<degree_celsius>(),
                ceiling.minus(*junction).get::<delta_kelvin>(),
                ceiling.get::<degree_celsius>(),
            ),
            Self::PressureDropAboveBudget {
                pressure_drop,
                budget,
            } => write!(
                f,
                "pressure drop {:.1} psi exceeds the {:.1} psi budget; consider manifold redesign",
                pressure_drop.get::<pound_force_per_square_inch>(),
                budget.get::<pound_force_per_square_inch>(),
            ),
            Self::LaminarAtHighLoad { heat_load } => write!(
                f,
                "laminar flow at {:.0} W; convection-limited, increase flow rate",
                heat_load.get::<watt>(),
            ),
            Self::LowReynolds { reynolds } => write!(
                f,
                "very low Reynolds number ({reynolds:.0}); risk of poor flow distribution",
            ),
        }
    }
}

/// Thresholds used by the warning checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarningPolicy {
    /// Maximum rated junction temperature.
    pub junction_ceiling: ThermodynamicTemperature,

    /// Band below the ceiling that triggers a near-ceiling warning.
    pub junction_margin: TemperatureInterval,

    /// Largest pressure drop a typical coolant loop can spare for the plate.
    pub pressure_drop_budget: Pressure,

    /// Heat load above which laminar flow is flagged.
    pub laminar_heat_load: Power,

    /// Reynolds number below which flow distribution is flagged.
    pub min_reynolds: f64,
}

impl Default for WarningPolicy {
    fn default() -> Self {
        Self {
            junction_ceiling: ThermodynamicTemperature::new::<degree_celsius>(85.0),
            junction_margin: TemperatureInterval::new::<delta_kelvin>(5.0),
            pressure_drop_budget: Pressure::new::<pound_force_per_square_inch>(15.0),
            laminar_heat_load: Power::new::<watt>(500.0),
            min_reynolds: 500.0,
        }
    }
}

impl WarningPolicy {
    /// Returns the warnings raised by an analysed operating point.
    #[must_use]
    pub fn evaluate(
        &self,
        point: &OperatingPoint,
        reynolds: f64,
        correlation: &Correlation,
        network: &Network,
        hydraulics: &Hydraulics,
    ) -> Vec<Warning> {
        let mut warnings = Vec::new();

        let junction = network.junction_temperature;
        let headroom = self.junction_ceiling.minus(junction);
        if headroom.get::<delta_kelvin>() < 0.0 {
            warnings.push(Warning::JunctionAboveCeiling {
                junction,
                ceiling: self.junction_ceiling,
            });
        } else if headroom < self.junction_margin {
            warnings.push(Warning::JunctionNearCeiling {
                junction,
                ceiling: self.junction_ceiling,
            });
        }

        if hydraulics.pressure_drop.get::<pascal>() > self.pressure_drop_budget.get::<pascal>() {
            warnings.push(Warning::PressureDropAboveBudget {
                pressure_drop: hydraulics.pressure_drop,
                budget: self.pressure_drop_budget,
            });
        }

        let heat_load = point.heat_load();
        if correlation.regime == Regime::Laminar && heat_load > self.laminar_heat_load {
            warnings.push(Warning::LaminarAtHighLoad { heat_load });
        }

        if reynolds < self.min_reynolds {
            warnings.push(Warning::LowReynolds { reynolds });
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{HeatTransfer, MassRate},
        heat_transfer::watt_per_square_meter_kelvin,
        mass_rate::kilogram_per_second,
    };

    use crate::support::{
        constraint::StrictlyPositive,
        units::{KelvinPerWatt, ThermalResistance},
    };

    use crate::models::thermal::cold_plate::core::Resistances;

    fn network_at(junction_c: f64) -> Network {
        let r = ThermalResistance::from_kelvin_per_watt(0.01);
        Network {
            heat_transfer_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(10_000.0),
            resistances: Resistances {
                junction_to_case: r,
                tim: r,
                base_conduction: r,
                convection: r,
                total: r + r + r + r,
            },
            mass_flow: MassRate::new::<kilogram_per_second>(0.1),
            coolant_rise: TemperatureInterval::new::<delta_kelvin>(1.0),
            junction_temperature: ThermodynamicTemperature::new::<degree_celsius>(junction_c),
        }
    }

    fn hydraulics_at(pressure_psi: f64) -> Hydraulics {
        Hydraulics {
            pressure_drop: Pressure::new::<pound_force_per_square_inch>(pressure_psi),
            pump_power: Power::new::<watt>(1.0),
        }
    }

    fn turbulent() -> Correlation {
        Correlation {
            regime: Regime::Turbulent,
            nusselt: 40.0,
            friction_factor: 0.03,
        }
    }

    #[test]
    fn comfortable_point_has_no_warnings() {
        let warnings = WarningPolicy::default().evaluate(
            &OperatingPoint::default(),
            5000.0,
            &turbulent(),
            &network_at(70.0),
            &hydraulics_at(3.0),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn junction_checks_are_exclusive() {
        let policy = WarningPolicy::default();
        let point = OperatingPoint::default();

        let at = |junction_c| {
            policy.evaluate(
                &point,
                5000.0,
                &turbulent(),
                &network_at(junction_c),
                &hydraulics_at(3.0),
            )
        };

        let near = at(82.0);
        assert!(matches!(near[..], [Warning::JunctionNearCeiling { .. }]));

        let above = at(90.0);
        assert!(matches!(above[..], [Warning::JunctionAboveCeiling { .. }]));
        assert_eq!(
            above[0].to_string(),
            "junction temperature 90.0 °C exceeds 85.0 °C; increase flow rate"
        );
    }

    #[test]
    fn pressure_budget() {
        let warnings = WarningPolicy::default().evaluate(
            &OperatingPoint::default(),
            5000.0,
            &turbulent(),
            &network_at(60.0),
            &hydraulics_at(20.0),
        );

        assert!(matches!(
            warnings[..],
            [Warning::PressureDropAboveBudget { .. }]
        ));
        assert_eq!(
            warnings[0].to_string(),
            "pressure drop 20.0 psi exceeds the 15.0 psi budget; consider manifold redesign"
        );
    }

    #[test]
    fn slow_laminar_flow_at_high_load() {
        let laminar = Correlation {
            regime: Regime::Laminar,
            nusselt: 4.36,
            friction_factor: 0.16,
        };

        let warnings = WarningPolicy::default().evaluate(
            &OperatingPoint::default(),
            400.0,
            &laminar,
            &network_at(60.0),
            &hydraulics_at(1.0),
        );

        assert_eq!(
            warnings,
            vec![
                Warning::LaminarAtHighLoad {
                    heat_load: Power::new::<watt>(700.0)
                },
                Warning::LowReynolds { reynolds: 400.0 },
            ]
        );
        assert_eq!(
            warnings[1].to_string(),
            "very low Reynolds number (400); risk of poor flow distribution"
        );
    }

    #[test]
    fn laminar_at_low_load_is_fine() {
        let laminar = Correlation {
            regime: Regime::Laminar,
            nusselt: 4.36,
            friction_factor: 0.04,
        };
        let heat_load = StrictlyPositive::new(Power::new::<watt>(300.0)).unwrap();
        let point = OperatingPoint::default().with_constrained_heat_load(heat_load);

        let warnings = WarningPolicy::default().evaluate(
            &point,
            1600.0,
            &laminar,
            &network_at(50.0),
            &hydraulics_at(1.0),
        );

        assert!(warnings.is_empty());
    }
}
