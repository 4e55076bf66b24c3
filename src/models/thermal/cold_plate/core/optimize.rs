//! Minimum coolant flow for a junction temperature target.
//!
//! Junction temperature is non-increasing in flow rate for the constant
//! property, regime-blended model analysed here, so a bracketed bisection on
//! `Tj(flow) - target` finds the smallest flow meeting the target. A model with
//! temperature-dependent properties could break that ordering and would need a
//! sweep instead.

mod config;
mod error;
mod problem;
mod range;

pub use config::OptimizeConfig;
pub use error::OptimizeError;

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{ThermodynamicTemperature, VolumeRate},
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

use super::{Analysis, ColdPlateModel, Field, InputError, OperatingPoint};

use problem::{FlowModel, FlowProblem};
use range::FlowRange;

/// Accepted junction temperature targets, in °C.
const TARGET_RANGE_C: (f64, f64) = (0.0, 200.0);

/// Outcome of a minimum-flow search.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Junction temperature target searched for.
    pub target: ThermodynamicTemperature,

    /// Smallest flow meeting the target, or the upper bound when none does.
    pub minimum_flow_rate: VolumeRate,

    /// False when even the upper bound leaves the junction above the target.
    pub met_target: bool,

    /// Full analysis at [`minimum_flow_rate`](Self::minimum_flow_rate).
    pub analysis: Analysis,

    /// Bisection iterations performed, zero when a bound decided the result.
    pub iters: usize,
}

/// Searches `[flow_min, flow_max]` for the smallest flow whose junction
/// temperature does not exceed `target`.
///
/// The flow rate in `point` is ignored.
pub(super) fn optimize_flow(
    model: &ColdPlateModel<'_>,
    point: &OperatingPoint,
    target: ThermodynamicTemperature,
    flow_min: VolumeRate,
    flow_max: VolumeRate,
    config: OptimizeConfig,
) -> Result<OptimizationResult, OptimizeError> {
    let range = FlowRange::new(flow_min, flow_max)?;
    let target_c = target.get::<degree_celsius>();
    if !target_c.is_finite() {
        return Err(InputError::NotFinite {
            field: Field::TargetJunctionTemperature,
        }
        .into());
    }
    let (lowest_c, highest_c) = TARGET_RANGE_C;
    InputError::check_range(Field::TargetJunctionTemperature, target_c, lowest_c, highest_c)?;
    let [min_lpm, max_lpm] = range.bracket_lpm();

    let meets = |analysis: &Analysis| analysis.junction_temperature <= target;
    let result = |minimum_flow_rate, met_target, analysis, iters| OptimizationResult {
        target,
        minimum_flow_rate,
        met_target,
        analysis,
        iters,
    };

    let at_max = model.analyze(&point.clone().with_constrained_flow_rate(range.max()))?;
    if !meets(&at_max) {
        log::debug!(
            "target {target_c:.2} C infeasible: Tj={:.2} C at flow_max={max_lpm:.3} L/min",
            at_max.junction_temperature.get::<degree_celsius>(),
        );
        return Ok(result(flow_max, false, at_max, 0));
    }

    let at_min = model.analyze(&point.clone().with_constrained_flow_rate(range.min()))?;
    if meets(&at_min) {
        log::debug!("target {target_c:.2} C met at flow_min={min_lpm:.3} L/min");
        return Ok(result(flow_min, true, at_min, 0));
    }

    let flow_model = FlowModel::new(model, point);
    let problem = FlowProblem::new(target);

    let solution = bisection::solve(
        &flow_model,
        &problem,
        range.bracket_lpm(),
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Analyses only fail here at flows too low to be physical, so
            // treat a failure as a junction above target.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        log::warn!(
            "flow search did not converge in {} iterations, residual {:.3e} K",
            solution.iters,
            solution.residual,
        );
    }

    let flow = VolumeRate::new::<liter_per_minute>(solution.x);
    if solution.residual <= 0.0 {
        return Ok(result(flow, true, solution.snapshot.output, solution.iters));
    }

    // The closest evaluation sits just below the target flow. One tolerance
    // step up crosses the root; the upper bound is the fallback.
    let nudged = (solution.x + config.flow_tol.get::<liter_per_minute>()).min(max_lpm);
    let nudged = VolumeRate::new::<liter_per_minute>(nudged);
    let at_nudged = model.analyze(&point.clone().with_flow_rate(nudged)?)?;
    if meets(&at_nudged) {
        return Ok(result(nudged, true, at_nudged, solution.iters));
    }

    log::debug!("nudged flow still above target; falling back to flow_max");
    Ok(result(flow_max, true, at_max, solution.iters))
}
