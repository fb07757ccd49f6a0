//! Binding of mapper values to SQLite parameters

use rowmap_core::Value;
use rusqlite::types::{ToSql, ToSqlOutput, ValueRef};

/// Borrowed view of a [`Value`] that rusqlite can bind
///
/// Booleans bind as integers 0/1, SQLite's own representation.
#[derive(Debug, Clone, Copy)]
pub struct SqlValue<'a>(pub &'a Value);

impl ToSql for SqlValue<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value_ref = match self.0 {
            Value::Null => ValueRef::Null,
            Value::Integer(n) => ValueRef::Integer(*n),
            Value::Real(n) => ValueRef::Real(*n),
            Value::Text(s) => ValueRef::Text(s.as_bytes()),
            Value::Blob(bytes) => ValueRef::Blob(bytes),
            Value::Boolean(b) => ValueRef::Integer(i64::from(*b)),
        };
        Ok(ToSqlOutput::Borrowed(value_ref))
    }
}

/// Bind a positional value sequence
pub fn params(values: &[Value]) -> rusqlite::ParamsFromIter<impl Iterator<Item = SqlValue<'_>>> {
    rusqlite::params_from_iter(values.iter().map(SqlValue))
}
