//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{GeoLocation, RegionTag, WeatherReport};
use integration_weather::{Observation, OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::instrument;

/// Adapter for the OpenWeatherMap-backed weather provider
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter from upstream configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenWeatherClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Upstream query string for a city, qualified with the region's
    /// country code when known
    fn build_query(name: &str, region: RegionTag) -> String {
        region
            .country_code()
            .map_or_else(|| name.to_string(), |code| format!("{name},{code}"))
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::RateLimitExceeded => {
                ApplicationError::ExternalService("Rate limit exceeded".to_string())
            },
        }
    }

    /// Convert a normalized observation into the domain report
    fn map_observation(obs: Observation) -> WeatherReport {
        WeatherReport {
            city: obs.city,
            country: obs.country,
            temperature: obs.temperature,
            feels_like: obs.feels_like,
            description: obs.description,
            humidity: obs.humidity,
            wind_speed: obs.wind_speed,
            pressure: obs.pressure,
            visibility: obs.visibility_km,
            uv_index: obs.uv_index,
            last_updated: obs.observed_at,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_by_coordinates(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError> {
        self.client
            .current_by_coordinates(location.latitude(), location.longitude())
            .await
            .map(Self::map_observation)
            .map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(city = %name, region = %region))]
    async fn fetch_by_city(
        &self,
        name: &str,
        region: RegionTag,
    ) -> Result<WeatherReport, ApplicationError> {
        let query = Self::build_query(name, region);
        self.client
            .current_by_query(&query)
            .await
            .map(Self::map_observation)
            .map_err(Self::map_error)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
