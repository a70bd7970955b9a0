//! Weather fetch orchestration
//!
//! Issues one upstream lookup per requested target, sequentially,
//! collecting whatever succeeds. A failed target is dropped from the
//! result rather than failing the whole operation.

use std::sync::Arc;

use domain::{GeoLocation, WeatherReport, catalog};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::WeatherPort};

/// One weather request: city names and/or a coordinate pair
#[derive(Debug, Clone, Default)]
pub struct WeatherQuery {
    /// City names to look up, in request order
    pub cities: Vec<String>,
    /// Coordinate pair, honored only when `use_current_location` is set
    pub coordinates: Option<GeoLocation>,
    /// Whether the coordinate pair should be used
    pub use_current_location: bool,
}

/// Multi-target weather fetch with partial failure tolerance
pub struct WeatherService {
    provider: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("provider", &"<WeatherPort>")
            .finish()
    }
}

impl WeatherService {
    /// Create a new service over a weather provider port
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherPort>) -> Self {
        Self { provider }
    }

    /// Fetch current conditions for every target in the query
    ///
    /// The coordinate record, when requested and obtained, comes first;
    /// per-city records follow in input order. Repeated city names are
    /// looked up repeatedly. Targets that fail upstream are omitted.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoWeatherData` when no target yields
    /// a record.
    #[instrument(skip(self, query), fields(cities = query.cities.len(), by_coordinates = query.use_current_location))]
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<Vec<WeatherReport>, ApplicationError> {
        let mut reports = Vec::new();

        if query.use_current_location {
            if let Some(location) = query.coordinates {
                match self.provider.fetch_by_coordinates(&location).await {
                    Ok(report) => reports.push(report),
                    Err(e) => {
                        warn!(%location, error = %e, "Coordinate lookup failed, omitting");
                    },
                }
            }
        }

        for city in &query.cities {
            let region = catalog::classify(city);
            debug!(city = %city, region = %region, "Looking up city");
            match self.provider.fetch_by_city(city, region).await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    warn!(city = %city, error = %e, "City lookup failed, omitting");
                },
            }
        }

        if reports.is_empty() {
            return Err(ApplicationError::NoWeatherData);
        }

        debug!(records = reports.len(), "Weather fetch complete");
        Ok(reports)
    }

    /// Check whether the upstream provider is reachable
    pub async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}
