use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Non-terminating trajectory: {0}")]
    NonTerminatingTrajectory(String),
}
