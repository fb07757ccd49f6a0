//! rowmap Store - SQLite backend for the row mapper
//!
//! Provides:
//! - Connection configuration loaded from TOML
//! - `SqliteConnection`, the backend collaborator `persist` runs against
//! - Binding of mapper values to SQLite parameters
//! - Classification of SQLite failures (constraint violations)

pub mod config;
pub mod connection;
pub mod db;
pub mod errors;
pub mod value;

// Re-export key types
pub use config::{JournalMode, SqliteConfig};
pub use connection::{SqliteConnection, SqliteCursor};
pub use errors::{is_constraint_violation, Result};
