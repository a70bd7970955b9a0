//! Weather provider port
//!
//! Defines the interface for current-weather retrieval, swappable for a
//! fake upstream client in tests.

use async_trait::async_trait;
use domain::{GeoLocation, RegionTag, WeatherReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for current-weather lookups against the upstream provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions for a coordinate pair
    async fn fetch_by_coordinates(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError>;

    /// Fetch current conditions for a city name
    ///
    /// A known region tag qualifies the upstream lookup with its
    /// country code; `RegionTag::Unknown` falls back to the name alone.
    async fn fetch_by_city(
        &self,
        name: &str,
        region: RegionTag,
    ) -> Result<WeatherReport, ApplicationError>;

    /// Check whether the upstream provider is reachable
    async fn is_available(&self) -> bool;
}
