//! Application state shared across handlers

use std::sync::Arc;

use application::{WeatherService, ports::PreferenceStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Multi-target weather fetch orchestration
    pub weather_service: Arc<WeatherService>,
    /// Favorite-city preference storage
    pub preference_store: Arc<dyn PreferenceStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("weather_service", &self.weather_service)
            .field("preference_store", &"<PreferenceStore>")
            .finish()
    }
}
