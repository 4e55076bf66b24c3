//! Problem formulation for the minimum-flow search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{ThermodynamicTemperature, VolumeRate},
    temperature_interval::kelvin as delta_kelvin,
    volume_rate::liter_per_minute,
};

use crate::support::units::TemperatureDifference;

use super::super::{Analysis, AnalysisError, ColdPlateModel, OperatingPoint};

/// Model adapter exposing flow rate as the sole input.
///
/// Every other field of the operating point is held fixed.
pub(super) struct FlowModel<'a> {
    model: &'a ColdPlateModel<'a>,
    point: &'a OperatingPoint,
}

impl<'a> FlowModel<'a> {
    pub(super) fn new(model: &'a ColdPlateModel<'a>, point: &'a OperatingPoint) -> Self {
        Self { model, point }
    }
}

impl Model for FlowModel<'_> {
    type Input = VolumeRate;
    type Output = Analysis;
    type Error = AnalysisError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let point = self.point.clone().with_flow_rate(*input)?;
        self.model.analyze(&point)
    }
}

/// Equation problem for a junction temperature target.
///
/// Computes the residual as `junction_temperature - target`, which falls as
/// flow rises.
pub(super) struct FlowProblem {
    target: ThermodynamicTemperature,
}

impl FlowProblem {
    pub(super) fn new(target: ThermodynamicTemperature) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for FlowProblem {
    type Input = VolumeRate;
    type Output = Analysis;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(VolumeRate::new::<liter_per_minute>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output
            .junction_temperature
            .minus(self.target)
            .get::<delta_kelvin>()])
    }
}
