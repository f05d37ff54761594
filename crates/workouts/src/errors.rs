use thiserror::Error;

/// Failures raised while turning a sensor package into a workout.
///
/// Both kinds are detected before any workout value exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0}")]
    UnknownActivityCode(String),

    #[error("Malformed parameters: {0}")]
    MalformedParameters(String),
}

impl WorkoutError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        WorkoutError::MalformedParameters(msg.into())
    }
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;
