//! City preference entity
//!
//! A user's saved city, with favorite flag and access bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A stored favorite-city preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityPreference {
    /// City name as entered by the user
    city_name: String,
    /// Two-letter country code (may be empty)
    country_code: String,
    /// Latitude in degrees
    latitude: f64,
    /// Longitude in degrees
    longitude: f64,
    /// Whether the user starred this city
    favorite: bool,
    /// When the row was first created
    created_at: DateTime<Utc>,
    /// When the row was last saved
    last_accessed: DateTime<Utc>,
}

impl CityPreference {
    /// Create a new preference, stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the city name is blank.
    pub fn new(
        city_name: impl Into<String>,
        country_code: impl Into<String>,
        latitude: f64,
        longitude: f64,
        favorite: bool,
    ) -> Result<Self, DomainError> {
        let city_name = city_name.into();
        if city_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "city name must not be empty".to_string(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            city_name,
            country_code: country_code.into(),
            latitude,
            longitude,
            favorite,
            created_at: now,
            last_accessed: now,
        })
    }

    /// Restore a preference from storage
    #[must_use]
    pub const fn restore(
        city_name: String,
        country_code: String,
        latitude: f64,
        longitude: f64,
        favorite: bool,
        created_at: DateTime<Utc>,
        last_accessed: DateTime<Utc>,
    ) -> Self {
        Self {
            city_name,
            country_code,
            latitude,
            longitude,
            favorite,
            created_at,
            last_accessed,
        }
    }

    /// Get the city name
    #[must_use]
    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    /// Get the country code
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether the user starred this city
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Get the creation timestamp
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last-accessed timestamp
    #[must_use]
    pub const fn last_accessed(&self) -> DateTime<Utc> {
        self.last_accessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_both_timestamps() {
        let pref =
            CityPreference::new("Seattle", "US", 47.6062, -122.3321, true).expect("valid name");
        assert_eq!(pref.created_at(), pref.last_accessed());
        assert!(pref.is_favorite());
    }

    #[test]
    fn blank_city_name_rejected() {
        let err = CityPreference::new("   ", "US", 0.0, 0.0, false).unwrap_err();
        assert!(err.to_string().contains("city name"));
    }

    #[test]
    fn restore_preserves_timestamps() {
        let created = Utc::now() - chrono::Duration::days(3);
        let accessed = Utc::now();
        let pref = CityPreference::restore(
            "Pune".to_string(),
            "IN".to_string(),
            18.5204,
            73.8567,
            false,
            created,
            accessed,
        );
        assert_eq!(pref.created_at(), created);
        assert_eq!(pref.last_accessed(), accessed);
        assert!(!pref.is_favorite());
    }
}
