use std::time::Instant;

use super::insert::build_insert_with;
use crate::backend::{Connection, Cursor};
use crate::errors::{Result, RowMapError};
use crate::model::{Entity, Value};
use crate::{log_op_end, log_op_error, log_op_start};

/// Insert `entity` as one row through `conn`
///
/// Builds the statement with the connection's placeholder convention, then
/// executes it on a cursor scoped to this call and commits. The cursor is
/// released on every exit path; if execution or commit fails nothing is
/// committed.
///
/// Returns the number of rows affected (1 on success).
///
/// # Errors
///
/// - `InvalidDescriptor` / `MissingAttribute` before the backend is touched
/// - `Persistence` wrapping the driver error when acquiring the cursor,
///   executing, or committing fails
pub fn persist<E, C>(entity: &E, conn: &mut C) -> Result<usize>
where
    E: Entity + ?Sized,
    C: Connection,
{
    let stmt = build_insert_with(entity, conn.placeholder_style())?;
    let table = entity.descriptor().table_name();

    let start = Instant::now();
    log_op_start!("persist", table = table);

    match execute_insert(conn, table, &stmt.sql, &stmt.values) {
        Ok(rows) => {
            log_op_end!(
                "persist",
                duration_ms = start.elapsed().as_millis() as u64,
                table = table,
                rows = rows as u64
            );
            Ok(rows)
        }
        Err(err) => {
            log_op_error!(
                "persist",
                &err,
                duration_ms = start.elapsed().as_millis() as u64,
                table = table
            );
            Err(err)
        }
    }
}

fn execute_insert<C: Connection>(
    conn: &mut C,
    table: &str,
    sql: &str,
    values: &[Value],
) -> Result<usize> {
    let mut cursor = conn
        .cursor()
        .map_err(|e| RowMapError::persistence(table, "cursor", e))?;

    // An early return drops the cursor uncommitted, which rolls it back
    let rows = cursor
        .execute(sql, values)
        .map_err(|e| RowMapError::persistence(table, "execute", e))?;

    cursor
        .commit()
        .map_err(|e| RowMapError::persistence(table, "commit", e))?;

    Ok(rows)
}
