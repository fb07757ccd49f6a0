//! Error handling for rowmap-store
//!
//! Maps SQLite failures into the rowmap-core error taxonomy

use rowmap_core::errors::{ExError, ExErrorKind, RowMapError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Returns true if `err` is a constraint violation reported by SQLite
pub fn is_sqlite_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Returns true if a persistence failure was caused by a SQLite constraint
///
/// Looks through the preserved backend error; any other error kind, or a
/// persistence failure from another backend, returns false.
pub fn is_constraint_violation(err: &RowMapError) -> bool {
    err.backend_source()
        .and_then(|source| source.downcast_ref::<rusqlite::Error>())
        .is_some_and(is_sqlite_constraint_violation)
}

/// Flatten a mapper error, classifying SQLite constraint violations
pub fn classify(err: &RowMapError) -> ExError {
    let ex = ExError::from(err);
    if is_constraint_violation(err) {
        ex.with_kind(ExErrorKind::ConstraintViolation)
    } else {
        ex
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> ExError {
    let kind = if is_sqlite_constraint_violation(&err) {
        ExErrorKind::ConstraintViolation
    } else {
        ExErrorKind::Persistence
    };
    ExError::new(kind)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

/// Create a configuration error
pub fn config_error(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_message(reason)
}

/// Create an IO error
pub fn io_error(op: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(op.to_string())
        .with_message(err.to_string())
}
