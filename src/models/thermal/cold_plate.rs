//! Liquid-cooled cold plate model.
//!
//! [`ColdPlateModel`] implements [`twine_core::Model`], mapping an
//! [`OperatingPoint`] to an [`Analysis`]. The same type offers coolant
//! comparison and a minimum-flow search for a junction temperature target.
//!
//! ```
//! use coldplate_models::models::thermal::cold_plate::{
//!     AnalysisReport, ColdPlateModel, OperatingPoint, Regime,
//! };
//! use twine_core::Model;
//!
//! let model = ColdPlateModel::default();
//! let analysis = model.call(&OperatingPoint::default()).unwrap();
//! assert_eq!(analysis.regime, Regime::Transitional);
//!
//! let report = AnalysisReport::from(&analysis);
//! assert!(report.junction_temp_c < 85.0);
//! ```

mod core;

pub use self::core::{
    Analysis, AnalysisError, AnalysisReport, ColdPlateModel, ComparisonReport, CoolantError,
    CoolantProperties, CoolantRecord, CoolantTable, Correlation, Field, FlowDerivation, Geometry,
    Hydraulics, InputError, InterfaceResistances, LAMINAR_LIMIT, LAMINAR_NUSSELT, Network,
    OperatingPoint, OptimizationReport, OptimizationResult, OptimizeConfig, OptimizeError,
    PUMP_EFFICIENCY, Regime, Resistances, ResistancesReport, TURBULENT_LIMIT, Warning,
    WarningPolicy, correlate,
};

use twine_core::Model;

impl Model for ColdPlateModel<'_> {
    type Input = OperatingPoint;
    type Output = Analysis;
    type Error = AnalysisError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.analyze(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Power, mass_rate::kilogram_per_second, power::watt, pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    };

    use super::core::test_support::{analyze, celsius, lpm, water_at};
    use crate::support::{
        constraint::ConstraintError,
        units::{KelvinPerWatt, TemperatureDifference},
    };

    /// Junction temperature had convection used a circular wetted perimeter
    /// (π·Dh) instead of the rectangular one (2·(w + Dh)).
    fn circular_perimeter_junction_c(analysis: &Analysis, heat_load_w: f64) -> f64 {
        analysis.junction_temperature.get::<degree_celsius>()
            + heat_load_w * analysis.resistances.convection.kelvin_per_watt() * (4.0 / PI - 1.0)
    }

    #[test]
    fn default_point_is_transitional() {
        let analysis = analyze(&OperatingPoint::default());

        assert_eq!(analysis.regime, Regime::Transitional);
        assert_relative_eq!(analysis.reynolds, 3734.0824, max_relative = 1e-6);
        assert_relative_eq!(analysis.nusselt, 31.33458, max_relative = 1e-6);
        assert_relative_eq!(
            analysis.resistances.convection.kelvin_per_watt(),
            0.004_155_42,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            analysis.junction_temperature.get::<degree_celsius>(),
            70.902_31,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            analysis.pressure_drop.get::<pascal>(),
            16_800.347,
            max_relative = 1e-6
        );
        assert_relative_eq!(analysis.pump_power.get::<watt>(), 4.480_09, max_relative = 1e-5);
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn default_point_with_circular_perimeter_reproduces_published_estimate() {
        let analysis = analyze(&OperatingPoint::default());

        assert_relative_eq!(
            circular_perimeter_junction_c(&analysis, 700.0),
            71.7,
            epsilon = 0.01
        );
    }

    #[test]
    fn warm_inlet_point_is_turbulent() {
        let point = water_at(10.0).with_temperatures(celsius(35.0), celsius(25.0)).unwrap();

        let analysis = analyze(&point);

        assert_eq!(analysis.regime, Regime::Turbulent);
        assert_relative_eq!(analysis.reynolds, 4667.603, max_relative = 1e-6);
        assert_relative_eq!(
            analysis.junction_temperature.get::<degree_celsius>(),
            80.084_55,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            analysis.pressure_drop.get::<pascal>(),
            26_503.04,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            circular_perimeter_junction_c(&analysis, 700.0),
            80.7,
            epsilon = 0.02
        );
        assert!(matches!(
            analysis.warnings[..],
            [Warning::JunctionNearCeiling { .. }]
        ));
    }

    #[test]
    fn energy_balance_closes() {
        for flow in [1.0, 5.0, 8.0, 20.0] {
            let point = water_at(flow);
            let analysis = analyze(&point);
            let cp = CoolantProperties::water()
                .specific_heat
                .get::<joule_per_kilogram_kelvin>();

            let absorbed = analysis.coolant_rise.get::<delta_kelvin>()
                * analysis.mass_flow.get::<kilogram_per_second>()
                * cp;
            assert_relative_eq!(absorbed, 700.0, max_relative = 1e-9);

            let outlet = analysis.outlet_temperature(point.inlet_temperature());
            assert_relative_eq!(
                outlet.minus(point.inlet_temperature()).get::<delta_kelvin>(),
                analysis.coolant_rise.get::<delta_kelvin>(),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn monotonic_in_flow_rate() {
        let mut previous: Option<Analysis> = None;

        for step in 2..=160 {
            let flow = 0.25 * f64::from(step);
            let analysis = analyze(&water_at(flow));

            assert_eq!(analysis.regime, Regime::classify(analysis.reynolds));

            if let Some(prev) = previous {
                assert!(
                    analysis.junction_temperature <= prev.junction_temperature,
                    "Tj rose at {flow} L/min"
                );
                assert!(
                    analysis.pressure_drop > prev.pressure_drop,
                    "dP did not rise at {flow} L/min"
                );
            }
            previous = Some(analysis);
        }
    }

    #[test]
    fn sweep_covers_all_regimes() {
        let regimes: Vec<Regime> = [2.0, 6.0, 12.0]
            .into_iter()
            .map(|flow| analyze(&water_at(flow)).regime)
            .collect();

        assert_eq!(
            regimes,
            [Regime::Laminar, Regime::Transitional, Regime::Turbulent]
        );
    }

    #[test]
    fn water_outperforms_glycol() {
        let model = ColdPlateModel::default();
        let results = model
            .compare(&OperatingPoint::default(), &["water", "glycol50"])
            .unwrap();

        let [water, glycol] = &results[..] else {
            panic!("expected two results");
        };
        assert_eq!(water.coolant, "water");
        assert_eq!(glycol.coolant, "glycol50");
        assert!(water.junction_temperature < glycol.junction_temperature);
        assert!(water.pump_power < glycol.pump_power);

        assert_eq!(glycol.regime, Regime::Laminar);
        assert_relative_eq!(
            glycol.junction_temperature.get::<degree_celsius>(),
            99.4495,
            max_relative = 1e-5
        );
        assert!(glycol.warnings.contains(&Warning::JunctionAboveCeiling {
            junction: glycol.junction_temperature,
            ceiling: celsius(85.0),
        }));
        assert!(glycol.warnings.contains(&Warning::LaminarAtHighLoad {
            heat_load: Power::new::<watt>(700.0),
        }));
    }

    #[test]
    fn compare_rejects_unknown_coolant() {
        let result =
            ColdPlateModel::default().compare(&OperatingPoint::default(), &["water", "oil"]);

        assert_eq!(
            result,
            Err(AnalysisError::Input(InputError::UnknownCoolant {
                id: String::from("oil")
            }))
        );
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let analyze_raw = |flow_lpm: f64, heat_load_w: f64| -> Result<Analysis, AnalysisError> {
            let point = OperatingPoint::default()
                .with_flow_rate(lpm(flow_lpm))?
                .with_heat_load(Power::new::<watt>(heat_load_w))?;
            ColdPlateModel::default().call(&point)
        };

        assert!(analyze_raw(8.0, 700.0).is_ok());
        assert_eq!(
            analyze_raw(-1.0, 700.0),
            Err(AnalysisError::Input(InputError::Invalid {
                field: Field::FlowRate,
                source: ConstraintError::Negative,
            }))
        );

        assert_eq!(
            analyze_raw(8.0, 0.0),
            Err(AnalysisError::Input(InputError::Invalid {
                field: Field::HeatLoad,
                source: ConstraintError::Zero,
            }))
        );
    }

    #[test]
    fn custom_coolant_table() {
        let mut table = CoolantTable::standard().clone();
        table
            .insert(
                "dielectric",
                CoolantRecord {
                    density_kg_m3: 1520.0,
                    cp_j_kgk: 1100.0,
                    k_w_mk: 0.065,
                    mu_pa_s: 0.00064,
                },
            )
            .unwrap();
        let model = ColdPlateModel::new(&table, WarningPolicy::default());

        let results = model
            .compare(&OperatingPoint::default(), &["water", "dielectric"])
            .unwrap();

        // Poor conductivity dominates despite the turbulent flow.
        assert_eq!(results[1].regime, Regime::Turbulent);
        assert!(results[1].junction_temperature > results[0].junction_temperature);
    }

    #[test]
    fn policy_thresholds_are_configurable() {
        let strict = WarningPolicy {
            junction_ceiling: celsius(70.0),
            ..WarningPolicy::default()
        };
        let model = ColdPlateModel::new(CoolantTable::standard(), strict);

        let analysis = model.call(&OperatingPoint::default()).unwrap();

        assert_eq!(
            analysis.warnings,
            vec![Warning::JunctionAboveCeiling {
                junction: analysis.junction_temperature,
                ceiling: celsius(70.0),
            }]
        );
    }
}
