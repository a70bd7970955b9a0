//! Weather fetch handler

use application::{ApplicationError, WeatherQuery};
use axum::{Json, extract::State};
use domain::{GeoLocation, WeatherReport};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Request body for a weather fetch
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRequest {
    /// City names to look up
    #[serde(default)]
    pub cities: Vec<String>,
    /// Latitude for the current-location path
    pub latitude: Option<f64>,
    /// Longitude for the current-location path
    pub longitude: Option<f64>,
    /// Whether the coordinate pair should be used
    #[serde(default)]
    pub use_current_location: bool,
}

/// Weather fetch response
///
/// Logical failure is signaled through `success`, not the HTTP status.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    pub weather_data: Vec<WeatherReport>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Fetch current weather for the requested targets
///
/// POST /api/weather
#[instrument(skip(state, request), fields(cities = request.cities.len()))]
pub async fn get_weather(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let coordinates = match (request.latitude, request.longitude) {
        (Some(lat), Some(lon)) => Some(
            GeoLocation::new(lat, lon)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        ),
        _ => None,
    };

    let query = WeatherQuery {
        cities: request.cities,
        coordinates,
        use_current_location: request.use_current_location,
    };

    match state.weather_service.fetch(&query).await {
        Ok(reports) => Ok(Json(WeatherResponse {
            weather_data: reports,
            success: true,
            error_message: None,
        })),
        Err(err @ ApplicationError::NoWeatherData) => Ok(Json(WeatherResponse {
            weather_data: Vec::new(),
            success: false,
            error_message: Some(err.to_string()),
        })),
        Err(other) => Err(ApiError::from(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_apply() {
        let request: WeatherRequest = serde_json::from_str("{}").expect("parse");
        assert!(request.cities.is_empty());
        assert!(request.latitude.is_none());
        assert!(!request.use_current_location);
    }

    #[test]
    fn request_parses_full_body() {
        let request: WeatherRequest = serde_json::from_str(
            r#"{
                "cities": ["New York", "Mumbai"],
                "latitude": 40.7128,
                "longitude": -74.006,
                "use_current_location": true
            }"#,
        )
        .expect("parse");
        assert_eq!(request.cities.len(), 2);
        assert!(request.use_current_location);
    }

    #[test]
    fn success_response_omits_error_message() {
        let response = WeatherResponse {
            weather_data: Vec::new(),
            success: true,
            error_message: None,
        };
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(!json.contains("error_message"));
    }

    #[test]
    fn failure_response_carries_message() {
        let response = WeatherResponse {
            weather_data: Vec::new(),
            success: false,
            error_message: Some("No weather data found for the provided locations".to_string()),
        };
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("No weather data found"));
    }
}
