//! City search and preference handlers

use axum::{
    Json,
    extract::{Query, State},
};
use domain::{CityPreference, catalog};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Number of preference rows returned by the listing endpoint
const PREFERENCE_LIST_LIMIT: usize = 10;

/// Query parameters for city search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query, matched as a substring
    #[serde(default)]
    pub q: String,
}

/// One city search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySearchResult {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// Search the static city catalog
///
/// GET /api/cities/search?q=
#[instrument]
pub async fn search_cities(Query(params): Query<SearchParams>) -> Json<Vec<CitySearchResult>> {
    let results = catalog::search(&params.q)
        .into_iter()
        .map(|entry| CitySearchResult {
            name: entry.name.to_string(),
            country: entry.region.country_code().unwrap_or_default().to_string(),
            lat: entry.latitude,
            lon: entry.longitude,
        })
        .collect();

    Json(results)
}

/// One stored preference on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityPreferenceResponse {
    pub city_name: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_favorite: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_accessed: chrono::DateTime<chrono::Utc>,
}

impl From<&CityPreference> for CityPreferenceResponse {
    fn from(pref: &CityPreference) -> Self {
        Self {
            city_name: pref.city_name().to_string(),
            country_code: pref.country_code().to_string(),
            latitude: pref.latitude(),
            longitude: pref.longitude(),
            is_favorite: pref.is_favorite(),
            created_at: pref.created_at(),
            last_accessed: pref.last_accessed(),
        }
    }
}

/// Request body for saving a preference
#[derive(Debug, Clone, Deserialize)]
pub struct SaveCityPreferenceRequest {
    pub city_name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Acknowledgement body for a saved preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedResponse {
    pub message: String,
}

/// List stored preferences, most recently accessed first
///
/// GET /api/cities/preferences
#[instrument(skip(state))]
pub async fn list_preferences(
    State(state): State<AppState>,
) -> Result<Json<Vec<CityPreferenceResponse>>, ApiError> {
    let preferences = state
        .preference_store
        .list(Some(PREFERENCE_LIST_LIMIT))
        .await?;

    Ok(Json(
        preferences.iter().map(CityPreferenceResponse::from).collect(),
    ))
}

/// Create or touch a preference
///
/// POST /api/cities/preferences
#[instrument(skip(state, request), fields(city = %request.city_name))]
pub async fn save_preference(
    State(state): State<AppState>,
    Json(request): Json<SaveCityPreferenceRequest>,
) -> Result<Json<SavedResponse>, ApiError> {
    state
        .preference_store
        .upsert(
            &request.city_name,
            &request.country_code,
            request.latitude,
            request.longitude,
            request.is_favorite,
        )
        .await?;

    Ok(Json(SavedResponse {
        message: "City preference saved successfully".to_string(),
    }))
}
