//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current-weather API
//! (<https://openweathermap.org/current>). Queried with an API key by
//! coordinates or by city name, metric units.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::Observation;
