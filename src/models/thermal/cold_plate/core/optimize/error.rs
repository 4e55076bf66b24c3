use thiserror::Error;
use twine_solvers::equation::bisection;

use super::super::{AnalysisError, InputError};

/// Errors that can occur while searching for the minimum flow rate.
///
/// A target that no flow in the range can meet is not an error; it is
/// reported through [`OptimizationResult::met_target`].
///
/// [`OptimizationResult::met_target`]: super::OptimizationResult::met_target
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The operating point, target, or flow range was rejected.
    #[error(transparent)]
    Input(InputError),

    /// An analysis at a bracket endpoint failed.
    #[error("analysis failed")]
    Analysis(#[source] AnalysisError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),
}

impl From<InputError> for OptimizeError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<AnalysisError> for OptimizeError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Input(err) => Self::Input(err),
            err @ AnalysisError::NonPhysical { .. } => Self::Analysis(err),
        }
    }
}
