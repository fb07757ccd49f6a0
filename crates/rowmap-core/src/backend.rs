//! Storage backend collaborator
//!
//! The mapper needs three things from a relational backend: a call-scoped
//! cursor, parameterized execution of SQL with positional values, and
//! commit. Drivers implement [`Connection`] and [`Cursor`]; the mapper
//! never holds a connection beyond a single call.

use crate::mapper::PlaceholderStyle;
use crate::model::Value;

/// A live connection able to hand out cursors
pub trait Connection {
    /// Native driver error
    type Error: std::error::Error + Send + Sync + 'static;

    /// Statement execution context borrowed from the connection
    type Cursor<'c>: Cursor<Error = Self::Error>
    where
        Self: 'c;

    /// Placeholder convention the driver expects in SQL text
    fn placeholder_style(&self) -> PlaceholderStyle;

    /// Acquire a cursor for one unit of work
    fn cursor(&mut self) -> Result<Self::Cursor<'_>, Self::Error>;
}

/// Call-scoped statement execution context
///
/// Dropping a cursor without calling [`Cursor::commit`] must release it
/// and discard any uncommitted work.
pub trait Cursor {
    /// Native driver error
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute `sql` with `values` bound positionally; returns rows affected
    fn execute(&mut self, sql: &str, values: &[Value]) -> Result<usize, Self::Error>;

    /// Make the work done through this cursor durable
    fn commit(self) -> Result<(), Self::Error>;
}
