use thiserror::Error;

use crate::math::function::evaluationerror::EvaluationError;
use crate::math::integration::integrationerror::IntegrationError;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Integration(#[from] IntegrationError)
}
