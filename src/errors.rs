use thiserror::Error;

/// Custom error types for the claimcheck system
#[derive(Debug, Error)]
pub enum FactCheckError {
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),

    #[error("Backend error ({status}): {message}")]
    BackendError { status: u16, message: String },

    #[error("Transport error contacting backend: {0}")]
    TransportError(String),

    #[error("No catalog sources matched the claim")]
    NoMatchingSources,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Simulation error: {0}")]
    SimulationError(String),

    #[error("System error: {0}")]
    SystemError(String),
}

/// Result type specific to claimcheck operations
pub type FactCheckResult<T> = Result<T, FactCheckError>;

impl FactCheckError {
    /// Whether a failed remote attempt with this error may silently fall back
    /// to the local simulation. Input validation and simulation failures are
    /// never absorbed.
    pub fn allows_fallback(&self) -> bool {
        matches!(
            self,
            FactCheckError::BackendError { .. } | FactCheckError::TransportError(_)
        )
    }
}

impl From<reqwest::Error> for FactCheckError {
    fn from(err: reqwest::Error) -> Self {
        FactCheckError::TransportError(err.to_string())
    }
}
