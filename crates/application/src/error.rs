//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream weather provider error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Every requested target failed or was absent
    #[error("No weather data found for the provided locations")]
    NoWeatherData,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
