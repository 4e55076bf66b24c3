//! Fixed-unit, serializable views of analysis results.
//!
//! Field names carry their units and never change, so callers can render or
//! forward reports without knowing about [`uom`].

use std::collections::BTreeMap;

use serde::Serialize;
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin, power::watt, pressure::pascal,
    temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

use crate::support::units::KelvinPerWatt;

use super::{Analysis, OptimizationResult, Regime, Resistances};

/// Series resistances in K/W.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResistancesReport {
    pub junction_to_case: f64,
    pub tim: f64,
    pub base_conduction: f64,
    pub convection: f64,
    pub total: f64,
}

impl From<&Resistances> for ResistancesReport {
    fn from(r: &Resistances) -> Self {
        Self {
            junction_to_case: r.junction_to_case.kelvin_per_watt(),
            tim: r.tim.kelvin_per_watt(),
            base_conduction: r.base_conduction.kelvin_per_watt(),
            convection: r.convection.kelvin_per_watt(),
            total: r.total.kelvin_per_watt(),
        }
    }
}

/// One analysis with temperatures in °C, pressure in Pa, power in W and
/// warnings rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub coolant: String,
    pub regime: Regime,
    pub reynolds: f64,
    pub nusselt: f64,
    pub heat_transfer_coeff_w_m2k: f64,
    pub pressure_drop_pa: f64,
    pub pump_power_w: f64,
    pub coolant_rise_c: f64,
    pub junction_temp_c: f64,
    pub resistances_k_per_w: ResistancesReport,
    pub warnings: Vec<String>,
}

impl From<&Analysis> for AnalysisReport {
    fn from(analysis: &Analysis) -> Self {
        Self {
            coolant: analysis.coolant.clone(),
            regime: analysis.regime,
            reynolds: analysis.reynolds,
            nusselt: analysis.nusselt,
            heat_transfer_coeff_w_m2k: analysis
                .heat_transfer_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            pressure_drop_pa: analysis.pressure_drop.get::<pascal>(),
            pump_power_w: analysis.pump_power.get::<watt>(),
            coolant_rise_c: analysis.coolant_rise.get::<delta_kelvin>(),
            junction_temp_c: analysis.junction_temperature.get::<degree_celsius>(),
            resistances_k_per_w: ResistancesReport::from(&analysis.resistances),
            warnings: analysis.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Minimum-flow search outcome with flows in L/min.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub target_max_junction_temp_c: f64,
    pub minimum_flow_rate_lpm: f64,
    pub met_target: bool,
    pub analysis_at_minimum_flow: AnalysisReport,
}

impl From<&OptimizationResult> for OptimizationReport {
    fn from(result: &OptimizationResult) -> Self {
        Self {
            target_max_junction_temp_c: result.target.get::<degree_celsius>(),
            minimum_flow_rate_lpm: result.minimum_flow_rate.get::<liter_per_minute>(),
            met_target: result.met_target,
            analysis_at_minimum_flow: AnalysisReport::from(&result.analysis),
        }
    }
}

/// Per-coolant reports for otherwise identical operating points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub results: BTreeMap<String, AnalysisReport>,
}

impl<'a> FromIterator<&'a Analysis> for ComparisonReport {
    fn from_iter<I: IntoIterator<Item = &'a Analysis>>(analyses: I) -> Self {
        Self {
            results: analyses
                .into_iter()
                .map(|analysis| (analysis.coolant.clone(), AnalysisReport::from(analysis)))
                .collect(),
        }
    }
}
