//! SQLite connection configuration

use serde::Deserialize;
use std::path::Path;

use crate::errors::{config_error, io_error, Result};

/// Path value that selects an in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// SQLite journal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    #[default]
    Delete,
    Wal,
    Memory,
}

impl JournalMode {
    /// Value passed to `PRAGMA journal_mode`
    pub fn as_pragma(&self) -> &'static str {
        match self {
            JournalMode::Delete => "DELETE",
            JournalMode::Wal => "WAL",
            JournalMode::Memory => "MEMORY",
        }
    }
}

/// Connection settings applied by [`crate::db::open_with`]
///
/// ```toml
/// db_path = "crm.db"
/// foreign_keys = true
/// journal_mode = "wal"
/// busy_timeout_ms = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SqliteConfig {
    /// Database file, or `:memory:`
    pub db_path: String,
    pub foreign_keys: bool,
    pub journal_mode: JournalMode,
    pub busy_timeout_ms: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            db_path: IN_MEMORY.to_string(),
            foreign_keys: true,
            journal_mode: JournalMode::Delete,
            busy_timeout_ms: 5000,
        }
    }
}

impl SqliteConfig {
    /// Config for a database file at `db_path`, other settings default
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// Config for a private in-memory database
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; absent keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| io_error("load_config", e))?;
        Self::from_toml_str(&text)
    }

    /// Returns true when the config selects an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.db_path == IN_MEMORY
    }

    fn validate(&self) -> Result<()> {
        if self.db_path.trim().is_empty() {
            return Err(config_error("db_path is empty"));
        }
        Ok(())
    }
}
