//! SQLite backend collaborator
//!
//! `SqliteConnection` owns a configured `rusqlite::Connection`; each cursor
//! it hands out is a transaction that rolls back unless committed.

use rowmap_core::backend::{Connection, Cursor};
use rowmap_core::{PlaceholderStyle, Value};
use rusqlite::Transaction;

use crate::config::SqliteConfig;
use crate::db;
use crate::errors::{config_error, Result};
use crate::value::params;

/// SQLite connection usable with [`rowmap_core::persist`]
pub struct SqliteConnection {
    conn: rusqlite::Connection,
    style: PlaceholderStyle,
}

impl SqliteConnection {
    /// Wrap an already opened connection
    pub fn new(conn: rusqlite::Connection) -> Self {
        Self {
            conn,
            style: PlaceholderStyle::QuestionMark,
        }
    }

    /// Open and configure a connection from `config`
    pub fn open(config: &SqliteConfig) -> Result<Self> {
        Ok(Self::new(db::open_with(config)?))
    }

    /// Use another placeholder convention
    ///
    /// SQLite accepts `?` and `?N`; other conventions are rejected.
    pub fn with_placeholder_style(mut self, style: PlaceholderStyle) -> Result<Self> {
        match style {
            PlaceholderStyle::QuestionMark | PlaceholderStyle::Numbered => {
                self.style = style;
                Ok(self)
            }
            other => Err(config_error(format!(
                "placeholder style {:?} is not supported by SQLite",
                other
            ))),
        }
    }

    /// Borrow the underlying rusqlite connection
    pub fn inner(&self) -> &rusqlite::Connection {
        &self.conn
    }

    /// Give back the underlying rusqlite connection
    pub fn into_inner(self) -> rusqlite::Connection {
        self.conn
    }
}

impl From<rusqlite::Connection> for SqliteConnection {
    fn from(conn: rusqlite::Connection) -> Self {
        Self::new(conn)
    }
}

impl Connection for SqliteConnection {
    type Error = rusqlite::Error;
    type Cursor<'c> = SqliteCursor<'c>;

    fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    fn cursor(&mut self) -> std::result::Result<SqliteCursor<'_>, rusqlite::Error> {
        let tx = self.conn.transaction()?;
        Ok(SqliteCursor { tx })
    }
}

/// Transaction-backed cursor; dropping it uncommitted rolls back
pub struct SqliteCursor<'c> {
    tx: Transaction<'c>,
}

impl Cursor for SqliteCursor<'_> {
    type Error = rusqlite::Error;

    fn execute(&mut self, sql: &str, values: &[Value]) -> std::result::Result<usize, rusqlite::Error> {
        self.tx.execute(sql, params(values))
    }

    fn commit(self) -> std::result::Result<(), rusqlite::Error> {
        self.tx.commit()
    }
}
