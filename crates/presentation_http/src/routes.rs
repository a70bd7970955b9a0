//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/healthz", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readiness_check))
        // Weather API
        .route("/api/weather", post(handlers::weather::get_weather))
        // City search and preferences
        .route("/api/cities/search", get(handlers::cities::search_cities))
        .route(
            "/api/cities/preferences",
            get(handlers::cities::list_preferences).post(handlers::cities::save_preference),
        )
        // Attach state
        .with_state(state)
}
