//! Upstream response models
//!
//! The OpenWeatherMap body nests `main`, `wind`, `weather[]`, and
//! `sys` objects. Parsing is defensive: any absent field falls back to
//! its zero value rather than failing the whole response.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Normalized current-weather observation for one location
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Resolved location name
    pub city: String,
    /// Two-letter country code
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent (feels like) temperature in Celsius
    pub feels_like: f64,
    /// Title-cased condition description
    pub description: String,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Surface pressure in hPa
    pub pressure: f64,
    /// Visibility in kilometers
    pub visibility_km: f64,
    /// UV index, when present in the response
    pub uv_index: Option<f64>,
    /// When this observation was parsed
    pub observed_at: DateTime<Utc>,
}

/// Raw upstream response body
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sys: SysData,
    #[serde(default)]
    pub main: MainData,
    #[serde(default)]
    pub wind: WindData,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    /// Visibility in meters
    #[serde(default)]
    pub visibility: Option<f64>,
    /// UV index, absent from the standard current-weather payload
    #[serde(default)]
    pub uvi: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SysData {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MainData {
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub pressure: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WindData {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ConditionData {
    #[serde(default)]
    pub description: String,
}

impl ApiResponse {
    /// Normalize into an [`Observation`], stamped with the current time
    pub(crate) fn into_observation(self) -> Observation {
        let description = self
            .weather
            .first()
            .map(|condition| title_case(&condition.description))
            .unwrap_or_default();

        Observation {
            city: self.name,
            country: self.sys.country,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            description,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            pressure: self.main.pressure,
            visibility_km: self.visibility.map_or(0.0, |meters| meters / 1000.0),
            uv_index: self.uvi,
            observed_at: Utc::now(),
        }
    }
}

/// Capitalize the first letter of each space-separated word, lowercase
/// the rest
fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
