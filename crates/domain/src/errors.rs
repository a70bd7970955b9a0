//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Coordinates outside the valid latitude/longitude ranges
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("city name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: city name must not be empty"
        );
    }

    #[test]
    fn invalid_coordinates_message_passes_through() {
        let err = DomainError::from(InvalidCoordinates);
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }
}
