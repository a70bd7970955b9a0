//! Weather report entity
//!
//! A normalized snapshot of current conditions for one location.
//! Produced fresh on every request and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current weather conditions for a single location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved city name as reported upstream
    pub city: String,
    /// Two-letter country code as reported upstream
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent (feels like) temperature in Celsius
    pub feels_like: f64,
    /// Title-cased condition description
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Surface pressure in hPa
    pub pressure: f64,
    /// Visibility in kilometers
    pub visibility: f64,
    /// UV index, when upstream provides one
    pub uv_index: Option<f64>,
    /// When this snapshot was taken
    pub last_updated: DateTime<Utc>,
}
