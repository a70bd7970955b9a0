//! SQLite preference store implementation
//!
//! Implements the `PreferenceStore` port using SQLite.

use std::sync::Arc;

use application::{error::ApplicationError, ports::PreferenceStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::CityPreference;
use rusqlite::{Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based city preference store
#[derive(Debug, Clone)]
pub struct SqlitePreferenceStore {
    pool: Arc<ConnectionPool>,
}

impl SqlitePreferenceStore {
    /// Create a new SQLite preference store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a `CityPreference`
fn row_to_preference(row: &Row<'_>) -> Result<CityPreference, rusqlite::Error> {
    let city_name: String = row.get(0)?;
    let country_code: String = row.get(1)?;
    let latitude: f64 = row.get(2)?;
    let longitude: f64 = row.get(3)?;
    let favorite: bool = row.get(4)?;
    let created_at_str: String = row.get(5)?;
    let last_accessed_str: String = row.get(6)?;

    let created_at = parse_timestamp(&created_at_str);
    let last_accessed = parse_timestamp(&last_accessed_str);

    Ok(CityPreference::restore(
        city_name,
        country_code,
        latitude,
        longitude,
        favorite,
        created_at,
        last_accessed,
    ))
}

/// Parse an RFC 3339 timestamp, falling back to now for legacy data
fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}

const SELECT_COLUMNS: &str =
    "city_name, country_code, latitude, longitude, is_favorite, created_at, last_accessed";

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    #[instrument(skip(self))]
    async fn list(&self, limit: Option<usize>) -> Result<Vec<CityPreference>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            // SQLite treats a negative LIMIT as "no limit"
            let limit = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));

            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {SELECT_COLUMNS} FROM user_city_preferences
                     ORDER BY last_accessed DESC LIMIT ?1"
                ))
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let rows = stmt
                .query_map([limit], row_to_preference)
                .map_err(|e| ApplicationError::Internal(e.to_string()))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!(count = rows.len(), "Listed city preferences");
            Ok(rows)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(city = %city_name))]
    async fn upsert(
        &self,
        city_name: &str,
        country_code: &str,
        latitude: f64,
        longitude: f64,
        favorite: bool,
    ) -> Result<CityPreference, ApplicationError> {
        // Validates the name before anything touches the database
        let candidate =
            CityPreference::new(city_name, country_code, latitude, longitude, favorite)?;

        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let now = Utc::now().to_rfc3339();

            // Existing rows keep their coordinates and created_at; only
            // the favorite flag and last_accessed move.
            conn.execute(
                "INSERT INTO user_city_preferences
                     (city_name, country_code, latitude, longitude, is_favorite, created_at, last_accessed)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
                 ON CONFLICT(city_name) DO UPDATE SET
                     is_favorite = excluded.is_favorite,
                     last_accessed = excluded.last_accessed",
                params![
                    candidate.city_name(),
                    candidate.country_code(),
                    candidate.latitude(),
                    candidate.longitude(),
                    candidate.is_favorite(),
                    now,
                ],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let stored = conn
                .query_row(
                    &format!(
                        "SELECT {SELECT_COLUMNS} FROM user_city_preferences
                         WHERE city_name = ?1 COLLATE NOCASE"
                    ),
                    [candidate.city_name()],
                    row_to_preference,
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!("Saved city preference");
            Ok(stored)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    async fn is_available(&self) -> bool {
        let pool = Arc::clone(&self.pool);
        task::spawn_blocking(move || {
            pool.get()
                .ok()
                .and_then(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)).ok())
                .is_some()
        })
        .await
        .unwrap_or(false)
    }
}
