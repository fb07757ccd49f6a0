use rowmap_store::{SqliteConfig, SqliteConnection};

/// Schema the domain entities are persisted to
pub const SCHEMA: &str = r#"
    CREATE TABLE users (
        name TEXT PRIMARY KEY,
        birthday TEXT NOT NULL
    );
    CREATE TABLE venues (
        name TEXT PRIMARY KEY
    );
"#;

/// In-memory connection with the domain schema applied
pub fn setup_test_db() -> SqliteConnection {
    let conn = SqliteConnection::open(&SqliteConfig::in_memory())
        .expect("Failed to open in-memory database");
    conn.inner()
        .execute_batch(SCHEMA)
        .expect("Failed to create schema");
    conn
}

/// Number of rows in `table`
#[allow(dead_code)]
pub fn count_rows(conn: &SqliteConnection, table: &str) -> i64 {
    conn.inner()
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .expect("Failed to count rows")
}
