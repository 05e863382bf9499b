use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("Not enough permissions")]
    PermissionDenied,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Inactive user")]
    InactiveUser,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Failed to parse AI response as JSON")]
    UnparsableAiResponse,

    #[error("Insecure configuration: {0}")]
    InsecureConfiguration(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn not_found(resource: &str) -> Self {
        CoreError::NotFound(format!("{resource} not found"))
    }
}
