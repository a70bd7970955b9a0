//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: SQLite
//! persistence for city preferences and the OpenWeatherMap-backed
//! weather provider.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::WeatherAdapter;
pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqlitePreferenceStore, create_pool};
