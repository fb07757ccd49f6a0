use rowmap_core::{Connection, Cursor, PlaceholderStyle, Value};

/// Error raised by the mock backend
#[derive(Debug, Clone, PartialEq)]
pub struct MockError(pub String);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MockError {}

/// Which step of the mock backend should fail
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Never,
    Cursor,
    Execute,
    Commit,
}

/// In-memory backend that records committed statements
///
/// Enforces a unique key on one value position when `unique_key` is set,
/// and counts cursor acquisition/release so tests can check scoping.
pub struct MockConnection {
    pub style: PlaceholderStyle,
    pub unique_key: Option<usize>,
    pub fail_at: FailAt,
    pub committed: Vec<(String, Vec<Value>)>,
    pub cursors_opened: usize,
    pub cursors_released: usize,
}

#[allow(dead_code)]
impl MockConnection {
    pub fn new() -> Self {
        Self {
            style: PlaceholderStyle::QuestionMark,
            unique_key: None,
            fail_at: FailAt::Never,
            committed: Vec::new(),
            cursors_opened: 0,
            cursors_released: 0,
        }
    }

    pub fn with_style(mut self, style: PlaceholderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_unique_key(mut self, position: usize) -> Self {
        self.unique_key = Some(position);
        self
    }

    pub fn failing_at(mut self, fail_at: FailAt) -> Self {
        self.fail_at = fail_at;
        self
    }

    /// Number of committed rows whose value at `position` equals `value`
    pub fn rows_with(&self, position: usize, value: &Value) -> usize {
        self.committed
            .iter()
            .filter(|(_, values)| values.get(position) == Some(value))
            .count()
    }
}

pub struct MockCursor<'c> {
    conn: &'c mut MockConnection,
    pending: Vec<(String, Vec<Value>)>,
}

impl Connection for MockConnection {
    type Error = MockError;
    type Cursor<'c> = MockCursor<'c>;

    fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    fn cursor(&mut self) -> Result<MockCursor<'_>, MockError> {
        if self.fail_at == FailAt::Cursor {
            return Err(MockError("connection lost".to_string()));
        }
        self.cursors_opened += 1;
        Ok(MockCursor {
            conn: self,
            pending: Vec::new(),
        })
    }
}

impl Cursor for MockCursor<'_> {
    type Error = MockError;

    fn execute(&mut self, sql: &str, values: &[Value]) -> Result<usize, MockError> {
        if self.conn.fail_at == FailAt::Execute {
            return Err(MockError("syntax error".to_string()));
        }
        if let Some(position) = self.conn.unique_key {
            let key = &values[position];
            let taken = self
                .conn
                .committed
                .iter()
                .chain(self.pending.iter())
                .any(|(_, existing)| existing.get(position) == Some(key));
            if taken {
                return Err(MockError("UNIQUE constraint failed".to_string()));
            }
        }
        self.pending.push((sql.to_string(), values.to_vec()));
        Ok(1)
    }

    fn commit(mut self) -> Result<(), MockError> {
        if self.conn.fail_at == FailAt::Commit {
            return Err(MockError("commit refused".to_string()));
        }
        let pending = std::mem::take(&mut self.pending);
        self.conn.committed.extend(pending);
        Ok(())
    }
}

impl Drop for MockCursor<'_> {
    fn drop(&mut self) {
        self.conn.cursors_released += 1;
    }
}
