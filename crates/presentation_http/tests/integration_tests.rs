//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::{collections::HashSet, sync::Arc};

use application::{
    WeatherService,
    error::ApplicationError,
    ports::WeatherPort,
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use domain::{GeoLocation, RegionTag, WeatherReport};
use infrastructure::{SqlitePreferenceStore, create_pool};
use presentation_http::{routes::create_router, state::AppState};
use serde_json::{Value, json};

/// Stub weather provider with a configurable set of failing targets
struct StubWeatherProvider {
    failing_cities: HashSet<String>,
    fail_coordinates: bool,
}

impl StubWeatherProvider {
    fn healthy() -> Self {
        Self {
            failing_cities: HashSet::new(),
            fail_coordinates: false,
        }
    }

    fn failing_everything() -> Self {
        Self {
            failing_cities: HashSet::new(),
            fail_coordinates: true,
        }
        .failing_all_cities()
    }

    fn failing_all_cities(mut self) -> Self {
        self.failing_cities.insert("*".to_string());
        self
    }

    fn failing_city(mut self, city: &str) -> Self {
        self.failing_cities.insert(city.to_string());
        self
    }

    fn fails(&self, city: &str) -> bool {
        self.failing_cities.contains("*") || self.failing_cities.contains(city)
    }

    fn report(city: &str, country: &str) -> WeatherReport {
        WeatherReport {
            city: city.to_string(),
            country: country.to_string(),
            temperature: 21.5,
            feels_like: 20.0,
            description: "Clear Sky".to_string(),
            humidity: 40.0,
            wind_speed: 2.5,
            pressure: 1015.0,
            visibility: 10.0,
            uv_index: None,
            last_updated: Utc::now(),
        }
    }
}

#[async_trait]
impl WeatherPort for StubWeatherProvider {
    async fn fetch_by_coordinates(
        &self,
        _location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError> {
        if self.fail_coordinates {
            return Err(ApplicationError::ExternalService("HTTP 500".to_string()));
        }
        Ok(Self::report("Current Location", ""))
    }

    async fn fetch_by_city(
        &self,
        name: &str,
        region: RegionTag,
    ) -> Result<WeatherReport, ApplicationError> {
        if self.fails(name) {
            return Err(ApplicationError::ExternalService("HTTP 404".to_string()));
        }
        Ok(Self::report(name, region.country_code().unwrap_or("")))
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Build a test server over an in-memory store and the given provider
fn test_server(provider: StubWeatherProvider) -> TestServer {
    let pool = create_pool(&infrastructure::config::DatabaseConfig::in_memory()).expect("pool");
    let state = AppState {
        weather_service: Arc::new(WeatherService::new(Arc::new(provider))),
        preference_store: Arc::new(SqlitePreferenceStore::new(Arc::new(pool))),
    };
    TestServer::new(create_router(state)).expect("test server")
}

// ============================================================================
// Health endpoints
// ============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn readyz_reports_ready() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server.get("/readyz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["database"]["healthy"], true);
}

// ============================================================================
// Weather endpoint
// ============================================================================

#[tokio::test]
async fn weather_two_cities_in_request_order() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server
        .post("/api/weather")
        .json(&json!({
            "cities": ["New York", "Mumbai"],
            "use_current_location": false
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let records = body["weather_data"].as_array().expect("array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["city"], "New York");
    assert_eq!(records[0]["country"], "US");
    assert_eq!(records[1]["city"], "Mumbai");
    assert_eq!(records[1]["country"], "IN");
}

#[tokio::test]
async fn weather_partial_failure_returns_survivors() {
    let server = test_server(StubWeatherProvider::healthy().failing_city("Atlantis"));
    let response = server
        .post("/api/weather")
        .json(&json!({"cities": ["Atlantis", "Chennai"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let records = body["weather_data"].as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["city"], "Chennai");
}

#[tokio::test]
async fn weather_total_failure_is_logical_not_http() {
    let server = test_server(StubWeatherProvider::failing_everything());
    let response = server
        .post("/api/weather")
        .json(&json!({
            "cities": ["New York", "Mumbai"],
            "latitude": 52.52,
            "longitude": 13.405,
            "use_current_location": true
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error_message"],
        "No weather data found for the provided locations"
    );
    assert!(body["weather_data"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn weather_coordinate_record_comes_first() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server
        .post("/api/weather")
        .json(&json!({
            "cities": ["Delhi"],
            "latitude": 52.52,
            "longitude": 13.405,
            "use_current_location": true
        }))
        .await;

    let body: Value = response.json();
    let records = body["weather_data"].as_array().expect("array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["city"], "Current Location");
    assert_eq!(records[1]["city"], "Delhi");
}

#[tokio::test]
async fn weather_coordinates_ignored_without_flag() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server
        .post("/api/weather")
        .json(&json!({
            "cities": ["Delhi"],
            "latitude": 52.52,
            "longitude": 13.405,
            "use_current_location": false
        }))
        .await;

    let body: Value = response.json();
    let records = body["weather_data"].as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["city"], "Delhi");
}

#[tokio::test]
async fn weather_invalid_coordinates_rejected() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server
        .post("/api/weather")
        .json(&json!({
            "cities": [],
            "latitude": 200.0,
            "longitude": 13.405,
            "use_current_location": true
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn weather_empty_request_is_logical_failure() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server
        .post("/api/weather")
        .json(&json!({"cities": []}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

// ============================================================================
// City search endpoint
// ============================================================================

#[tokio::test]
async fn search_short_query_returns_empty_list() {
    let server = test_server(StubWeatherProvider::healthy());

    for q in ["", "a"] {
        let response = server
            .get("/api/cities/search")
            .add_query_param("q", q)
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert!(body.as_array().expect("array").is_empty());
    }
}

#[tokio::test]
async fn search_matches_are_sorted_and_capped() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server
        .get("/api/cities/search")
        .add_query_param("q", "an")
        .await;

    let body: Value = response.json();
    let results = body.as_array().expect("array");
    assert_eq!(results.len(), 10);

    let names: Vec<&str> = results
        .iter()
        .map(|r| r["name"].as_str().expect("name"))
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn search_is_case_insensitive_and_returns_tuples() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server
        .get("/api/cities/search")
        .add_query_param("q", "MUMBAI")
        .await;

    let body: Value = response.json();
    let results = body.as_array().expect("array");
    let names: Vec<&str> = results
        .iter()
        .map(|r| r["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Mumbai", "Navi Mumbai"]);
    assert_eq!(results[0]["country"], "IN");
    assert!(results[0]["lat"].is_f64());
    assert!(results[0]["lon"].is_f64());
}

// ============================================================================
// Preference endpoints
// ============================================================================

#[tokio::test]
async fn preferences_start_empty() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server.get("/api/cities/preferences").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn preference_save_then_list() {
    let server = test_server(StubWeatherProvider::healthy());

    let response = server
        .post("/api/cities/preferences")
        .json(&json!({
            "city_name": "Seattle",
            "country_code": "US",
            "latitude": 47.6062,
            "longitude": -122.3321,
            "is_favorite": true
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "City preference saved successfully");

    let listed: Value = server.get("/api/cities/preferences").await.json();
    let rows = listed.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["city_name"], "Seattle");
    assert_eq!(rows[0]["is_favorite"], true);
    assert!(rows[0]["last_accessed"].is_string());
}

#[tokio::test]
async fn preference_upsert_keeps_single_row_with_latest_flag() {
    let server = test_server(StubWeatherProvider::healthy());

    for favorite in [true, false] {
        server
            .post("/api/cities/preferences")
            .json(&json!({
                "city_name": "Mumbai",
                "country_code": "IN",
                "latitude": 19.076,
                "longitude": 72.8777,
                "is_favorite": favorite
            }))
            .await;
    }

    let listed: Value = server.get("/api/cities/preferences").await.json();
    let rows = listed.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["is_favorite"], false);
}

#[tokio::test]
async fn preference_blank_name_is_rejected() {
    let server = test_server(StubWeatherProvider::healthy());
    let response = server
        .post("/api/cities/preferences")
        .json(&json!({"city_name": "   "}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn preference_listing_caps_at_ten() {
    let server = test_server(StubWeatherProvider::healthy());

    for i in 0..12 {
        server
            .post("/api/cities/preferences")
            .json(&json!({"city_name": format!("City {i}")}))
            .await;
    }

    let listed: Value = server.get("/api/cities/preferences").await.json();
    assert_eq!(listed.as_array().expect("array").len(), 10);
}
