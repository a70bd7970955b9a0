//! City preference storage port
//!
//! Defines the interface for favorite-city persistence.

use async_trait::async_trait;
use domain::CityPreference;

use crate::error::ApplicationError;

/// Port for city preference storage operations
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// List stored preferences, most recently accessed first
    ///
    /// An optional limit caps the number of rows returned.
    async fn list(&self, limit: Option<usize>) -> Result<Vec<CityPreference>, ApplicationError>;

    /// Create or touch a preference keyed by city name (case-insensitive)
    ///
    /// An existing row keeps its stored coordinates; only the favorite
    /// flag and last-accessed timestamp change. A new row is stamped
    /// with the current time for both timestamps.
    async fn upsert(
        &self,
        city_name: &str,
        country_code: &str,
        latitude: f64,
        longitude: f64,
        favorite: bool,
    ) -> Result<CityPreference, ApplicationError>;

    /// Check whether the backing store is reachable
    async fn is_available(&self) -> bool;
}
