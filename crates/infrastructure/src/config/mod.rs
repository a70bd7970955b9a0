//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//!
//! The upstream weather section reuses the config type exported by
//! `integration_weather`.

mod database;
mod server;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Upstream weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`, and
    /// `CITYWEATHER_*` environment variables (e.g. `CITYWEATHER_SERVER_PORT`)
    ///
    /// `OPENWEATHER_API_KEY`, when set, overrides the configured
    /// upstream API key last; the placeholder key stays in place when
    /// nothing provides a real one.
    ///
    /// # Errors
    ///
    /// Returns an error if a config source is present but malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("CITYWEATHER")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut app_config: Self = builder.build()?.try_deserialize()?;

        if let Ok(key) = std::env::var("OPENWEATHER_API_KEY") {
            if !key.is_empty() {
                app_config.weather.api_key = key;
            }
        }

        Ok(app_config)
    }
}
