use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error, Clone)]
pub enum AppError {
    /// Represents data validation errors (e.g., a message that fails input screening).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents an out-of-domain value passed where a closed vocabulary is expected
    /// (unknown gender, activity level or goal). Surfaced instead of silently
    /// defaulting so extraction bugs show up during testing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Represents a failure in the optional generative-response collaborator.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}
