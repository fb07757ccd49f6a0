//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

use crate::config::SqliteConfig;
use crate::errors::{config_error, from_rusqlite, Result};

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(|e| from_rusqlite("open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| from_rusqlite("open", e))
}

/// Open and configure a database as described by `config`
pub fn open_with(config: &SqliteConfig) -> Result<Connection> {
    let conn = if config.is_in_memory() {
        open_in_memory()?
    } else {
        open(&config.db_path)?
    };
    configure(&conn, config)?;

    tracing::debug!(
        op = "open_with",
        db_path = %config.db_path,
        journal_mode = config.journal_mode.as_pragma(),
        "sqlite connection opened"
    );
    Ok(conn)
}

/// Apply connection-level settings
pub fn configure(conn: &Connection, config: &SqliteConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", config.foreign_keys)
        .map_err(|e| from_rusqlite("configure", e))?;

    // journal_mode reports the resulting mode as a row
    let actual = conn
        .pragma_update_and_check(
            None,
            "journal_mode",
            config.journal_mode.as_pragma(),
            |row| row.get::<_, String>(0),
        )
        .map_err(|e| from_rusqlite("configure", e))?;
    verify_journal_mode(config, &actual)?;

    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|e| from_rusqlite("configure", e))?;

    Ok(())
}

/// Check that SQLite accepted the requested journal mode
///
/// In-memory databases always run in `MEMORY` mode, so the setting is
/// ignored for them.
fn verify_journal_mode(config: &SqliteConfig, actual: &str) -> Result<()> {
    if config.is_in_memory() {
        return Ok(());
    }
    let requested = config.journal_mode.as_pragma();
    if actual.eq_ignore_ascii_case(requested) {
        return Ok(());
    }
    Err(config_error(format!(
        "journal_mode {} was not applied to '{}' (database reports {})",
        requested, config.db_path, actual
    ))
    .with_op("configure"))
}
