use crate::errors::{Result, RowMapError};

/// Static table metadata for an entity type
///
/// A descriptor names the table an entity is persisted to and the ordered
/// list of columns written by an insert. Names are `'static`: they come from
/// type definitions, never from runtime input, because they are spliced
/// into SQL text verbatim.
///
/// One descriptor is shared by every instance of a type:
///
/// ```
/// use rowmap_core::Descriptor;
///
/// static USERS: Descriptor = Descriptor::new("users", &["name", "birthday"]);
///
/// assert_eq!(USERS.table_name(), "users");
/// assert_eq!(USERS.columns(), &["name", "birthday"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    table_name: &'static str,
    columns: &'static [&'static str],
}

impl Descriptor {
    /// Create a descriptor; usable in `static` and `const` items
    pub const fn new(table_name: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            table_name,
            columns,
        }
    }

    /// Table the entity is inserted into
    pub fn table_name(&self) -> &'static str {
        self.table_name
    }

    /// Columns in insert order
    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// Check the descriptor is usable for an insert
    ///
    /// Fails with `InvalidDescriptor` when the table name is blank, the
    /// column list is empty, or a column is blank or repeated.
    pub fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            return Err(self.invalid("table name is empty"));
        }

        if self.columns.is_empty() {
            return Err(self.invalid("column list is empty"));
        }

        for (index, column) in self.columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(self.invalid(format!("column at position {} is empty", index)));
            }
            if self.columns[..index].contains(column) {
                return Err(self.invalid(format!("column '{}' is declared twice", column)));
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> RowMapError {
        RowMapError::InvalidDescriptor {
            table: self.table_name.to_string(),
            reason: reason.into(),
        }
    }
}
