use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, VolumeRate},
    temperature_interval::kelvin as delta_kelvin,
    volume_rate::liter_per_minute,
};

/// Tolerances for the minimum-flow search.
///
/// The search stops when either the flow bracket is narrower than
/// `flow_tol` or the junction sits within `temp_tol` of the target.
#[derive(Debug, Clone, Copy)]
pub struct OptimizeConfig {
    pub max_iters: usize,

    pub flow_tol: VolumeRate,
    pub temp_tol: TemperatureInterval,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            max_iters: 50,
            flow_tol: VolumeRate::new::<liter_per_minute>(0.01),
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-3),
        }
    }
}

impl OptimizeConfig {
    /// Bisection settings, with flow expressed in L/min.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.flow_tol.get::<liter_per_minute>(),
            x_rel_tol: 0.0,
            residual_tol: self.temp_tol.get::<delta_kelvin>(),
        }
    }
}
