//! Steady-state thermal and hydraulic analysis of a microchannel cold plate.
//!
//! Heat flows from the junction through four series resistances
//! (junction-to-case, TIM, copper base conduction, and channel convection)
//! into a coolant whose bulk temperature rises across the plate. Channel
//! convection and friction come from Reynolds-number correlations that blend
//! linearly across the laminar-turbulent transition.
//!
//! All fluid properties are constant and the flow splits evenly across
//! identical parallel channels.

mod coolant;
mod correlation;
mod error;
mod flow;
mod hydraulics;
mod input;
mod network;
mod optimize;
mod report;
mod results;
mod warnings;

#[cfg(test)]
pub(crate) mod test_support;

pub use coolant::{CoolantError, CoolantProperties, CoolantRecord, CoolantTable};
pub use correlation::{
    Correlation, LAMINAR_LIMIT, LAMINAR_NUSSELT, Regime, TURBULENT_LIMIT, correlate,
};
pub use error::{AnalysisError, InputError};
pub use flow::FlowDerivation;
pub use hydraulics::{Hydraulics, PUMP_EFFICIENCY};
pub use input::{Field, Geometry, InterfaceResistances, OperatingPoint};
pub use network::{Network, Resistances};
pub use optimize::{OptimizationResult, OptimizeConfig, OptimizeError};
pub use report::{AnalysisReport, ComparisonReport, OptimizationReport, ResistancesReport};
pub use results::Analysis;
pub use warnings::{Warning, WarningPolicy};

use uom::si::{
    f64::{ThermodynamicTemperature, VolumeRate},
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

/// Cold plate analysis against a coolant table and a warning policy.
///
/// The model holds no per-call state, so one instance can serve any number of
/// analyses, including concurrent ones.
#[derive(Debug, Clone, Copy)]
pub struct ColdPlateModel<'a> {
    coolants: &'a CoolantTable,
    policy: WarningPolicy,
}

impl Default for ColdPlateModel<'static> {
    fn default() -> Self {
        Self::new(CoolantTable::standard(), WarningPolicy::default())
    }
}

impl<'a> ColdPlateModel<'a> {
    /// Creates a model that resolves coolants in `coolants` and raises
    /// warnings per `policy`.
    #[must_use]
    pub fn new(coolants: &'a CoolantTable, policy: WarningPolicy) -> Self {
        Self { coolants, policy }
    }

    /// Returns the table coolant identifiers are resolved against.
    #[must_use]
    pub fn coolants(&self) -> &'a CoolantTable {
        self.coolants
    }

    /// Returns the warning thresholds.
    #[must_use]
    pub fn policy(&self) -> &WarningPolicy {
        &self.policy
    }

    /// Analyses a single operating point.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Input`] if the operating point names an
    /// unknown coolant, and [`AnalysisError::NonPhysical`] if a derived
    /// quantity is negative or not finite.
    pub fn analyze(&self, point: &OperatingPoint) -> Result<Analysis, AnalysisError> {
        let coolant = self.coolants.lookup(point.coolant())?;

        let flow = FlowDerivation::derive(point);
        let reynolds = AnalysisError::check_physical("reynolds number", flow.reynolds(&coolant))?;
        let prandtl = coolant.prandtl();
        let correlation = correlate(reynolds, prandtl);

        let network = Network::compose(correlation.nusselt, &flow, point, &coolant)?;
        let hydraulics =
            Hydraulics::evaluate(correlation.friction_factor, &flow, point.geometry(), &coolant)?;
        let warnings = self
            .policy
            .evaluate(point, reynolds, &correlation, &network, &hydraulics);

        log::debug!(
            "{} at {:.3} L/min: Re={reynolds:.1} ({}), Tj={:.2} C, dP={:.0} Pa, {} warning(s)",
            point.coolant(),
            point.flow_rate().get::<liter_per_minute>(),
            correlation.regime.as_str(),
            network.junction_temperature.get::<degree_celsius>(),
            hydraulics.pressure_drop.get::<pascal>(),
            warnings.len(),
        );

        Ok(Analysis {
            coolant: point.coolant().to_owned(),
            flow_rate: point.flow_rate(),
            mass_flow: network.mass_flow,
            velocity: flow.velocity,
            reynolds,
            prandtl,
            regime: correlation.regime,
            nusselt: correlation.nusselt,
            friction_factor: correlation.friction_factor,
            heat_transfer_coefficient: network.heat_transfer_coefficient,
            resistances: network.resistances,
            coolant_rise: network.coolant_rise,
            junction_temperature: network.junction_temperature,
            pressure_drop: hydraulics.pressure_drop,
            pump_power: hydraulics.pump_power,
            warnings,
        })
    }

    /// Analyses the operating point once per coolant, in the order given.
    ///
    /// The coolant named in `point` is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first [`AnalysisError`] encountered.
    pub fn compare(
        &self,
        point: &OperatingPoint,
        coolants: &[&str],
    ) -> Result<Vec<Analysis>, AnalysisError> {
        coolants
            .iter()
            .map(|&id| self.analyze(&point.clone().with_coolant(id)))
            .collect()
    }

    /// Finds the smallest flow in `[flow_min, flow_max]` that keeps the
    /// junction at or below `target`.
    ///
    /// The flow rate in `point` is ignored. An unreachable target is reported
    /// with [`OptimizationResult::met_target`] set to false and the analysis
    /// at `flow_max`.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::Input`] for an invalid operating point, target,
    /// or flow range, and [`OptimizeError::Analysis`] or
    /// [`OptimizeError::Bisection`] if the search itself fails.
    pub fn optimize_flow(
        &self,
        point: &OperatingPoint,
        target: ThermodynamicTemperature,
        flow_min: VolumeRate,
        flow_max: VolumeRate,
        config: OptimizeConfig,
    ) -> Result<OptimizationResult, OptimizeError> {
        optimize::optimize_flow(self, point, target, flow_min, flow_max, config)
    }
}
