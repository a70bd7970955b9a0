//! SQLite persistence
//!
//! Connection pooling, schema migration, and the preference store
//! implementation.

mod connection;
mod migrations;
mod preference_store;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use preference_store::SqlitePreferenceStore;
