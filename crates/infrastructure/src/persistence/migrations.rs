//! Schema migrations
//!
//! Idempotent schema setup, run once at pool creation.

use rusqlite::Connection;

use super::connection::DatabaseError;

/// Create or update the schema
///
/// `city_name` collates NOCASE and is unique, so the upsert keys on the
/// name case-insensitively at the database level.
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS user_city_preferences (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            city_name TEXT NOT NULL COLLATE NOCASE UNIQUE,
            country_code TEXT NOT NULL DEFAULT '',
            latitude REAL NOT NULL DEFAULT 0,
            longitude REAL NOT NULL DEFAULT 0,
            is_favorite INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            last_accessed TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_city_preferences_last_accessed
            ON user_city_preferences (last_accessed DESC);
        ",
    )
    .map_err(DatabaseError::Sqlite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().expect("open");
        run_migrations(&conn).expect("first run");
        run_migrations(&conn).expect("second run");
    }

    #[test]
    fn city_name_is_unique_case_insensitively() {
        let conn = Connection::open_in_memory().expect("open");
        run_migrations(&conn).expect("migrate");

        conn.execute(
            "INSERT INTO user_city_preferences (city_name, created_at, last_accessed)
             VALUES ('Mumbai', '2026-01-01T00:00:00Z', '2026-01-01T00:00:00Z')",
            [],
        )
        .expect("insert");

        let duplicate = conn.execute(
            "INSERT INTO user_city_preferences (city_name, created_at, last_accessed)
             VALUES ('MUMBAI', '2026-01-01T00:00:00Z', '2026-01-01T00:00:00Z')",
            [],
        );
        assert!(duplicate.is_err());
    }
}
