use thiserror::Error;

/// Result type alias using RowMapError
pub type Result<T> = std::result::Result<T, RowMapError>;

/// Boxed native error from a storage backend
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log assertions, and external reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Metadata
    InvalidDescriptor,
    MissingAttribute,

    // Backend
    Persistence,
    ConstraintViolation,

    // Configuration/IO
    InvalidConfig,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidDescriptor => "ERR_INVALID_DESCRIPTOR",
            ExErrorKind::MissingAttribute => "ERR_MISSING_ATTRIBUTE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Flattened view of any failure with classification fields for
/// programmatic handling. Logging macros report errors through this type.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    table: Option<String>,
    column: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            column: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add column context
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Override the kind, keeping all context
    pub fn with_kind(mut self, kind: ExErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the table context, if any
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Get the column context, if any
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(column) = &self.column {
            write!(f, " (column: {})", column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for row mapping and persistence
#[derive(Error, Debug)]
pub enum RowMapError {
    /// Table or column metadata is malformed or missing
    #[error("Invalid descriptor for table '{table}': {reason}")]
    InvalidDescriptor { table: String, reason: String },

    /// Entity does not expose an attribute its own descriptor declares
    #[error("Entity for table '{table}' has no attribute for column '{column}'")]
    MissingAttribute { table: String, column: String },

    /// Backend rejected or failed to execute the statement
    #[error("Persistence failed for table '{table}' during {op}: {source}")]
    Persistence {
        table: String,
        op: &'static str,
        #[source]
        source: BackendError,
    },
}

impl RowMapError {
    /// Wrap a backend error raised while working on `table`
    pub fn persistence<E>(table: impl Into<String>, op: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RowMapError::Persistence {
            table: table.into(),
            op,
            source: Box::new(source),
        }
    }

    /// Get the canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            RowMapError::InvalidDescriptor { .. } => ExErrorKind::InvalidDescriptor,
            RowMapError::MissingAttribute { .. } => ExErrorKind::MissingAttribute,
            RowMapError::Persistence { .. } => ExErrorKind::Persistence,
        }
    }

    /// Get the backend's native error, if this is a persistence failure
    pub fn backend_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            RowMapError::Persistence { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<&RowMapError> for ExError {
    fn from(err: &RowMapError) -> Self {
        match err {
            RowMapError::InvalidDescriptor { table, reason } => {
                ExError::new(ExErrorKind::InvalidDescriptor)
                    .with_table(table.clone())
                    .with_message(reason.clone())
            }
            RowMapError::MissingAttribute { table, column } => {
                ExError::new(ExErrorKind::MissingAttribute)
                    .with_table(table.clone())
                    .with_column(column.clone())
                    .with_message("Declared column has no attribute on the entity")
            }
            RowMapError::Persistence { table, op, source } => {
                ExError::new(ExErrorKind::Persistence)
                    .with_table(table.clone())
                    .with_op(*op)
                    .with_message(source.to_string())
            }
        }
    }
}

impl From<RowMapError> for ExError {
    fn from(err: RowMapError) -> Self {
        ExError::from(&err)
    }
}
