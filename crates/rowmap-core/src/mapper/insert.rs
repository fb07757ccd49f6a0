use super::placeholder::PlaceholderStyle;
use crate::errors::{Result, RowMapError};
use crate::model::{Entity, Value};

/// Parameterized insert produced for one entity
///
/// `values[i]` binds to the placeholder of `columns[i]`. Built fresh on
/// every call and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub sql: String,
    pub values: Vec<Value>,
}

/// Build an insert using `?` placeholders
///
/// See [`build_insert_with`].
pub fn build_insert<E: Entity + ?Sized>(entity: &E) -> Result<InsertStatement> {
    build_insert_with(entity, PlaceholderStyle::QuestionMark)
}

/// Build an insert for `entity` using the given placeholder convention
///
/// Produces `INSERT INTO <table> (<c1>, ...) VALUES (<p1>, ...);` with one
/// value per declared column, in declaration order. Values are bound, never
/// written into the SQL text.
///
/// # Errors
///
/// - `InvalidDescriptor` if the entity's descriptor fails validation
/// - `MissingAttribute` if a declared column has no attribute on the entity
pub fn build_insert_with<E: Entity + ?Sized>(
    entity: &E,
    style: PlaceholderStyle,
) -> Result<InsertStatement> {
    let descriptor = entity.descriptor();
    descriptor.validate()?;

    let table = descriptor.table_name();
    let columns = descriptor.columns();

    let values = columns
        .iter()
        .map(|column| {
            entity
                .attribute(column)
                .ok_or_else(|| RowMapError::MissingAttribute {
                    table: table.to_string(),
                    column: (*column).to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut placeholders = String::new();
    for index in 0..columns.len() {
        if index > 0 {
            placeholders.push_str(", ");
        }
        style.write_placeholder(&mut placeholders, index);
    }

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table,
        columns.join(", "),
        placeholders
    );

    Ok(InsertStatement { sql, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Descriptor, Record};

    static USERS: Descriptor = Descriptor::new("users", &["name", "birthday"]);

    #[test]
    fn test_numbered_placeholders() {
        let record = Record::new(&USERS)
            .with("name", "sam")
            .with("birthday", "8/30/1999");
        let stmt = build_insert_with(&record, PlaceholderStyle::Numbered).unwrap();
        assert_eq!(stmt.sql, "INSERT INTO users (name, birthday) VALUES (?1, ?2);");
    }

    #[test]
    fn test_format_placeholders() {
        let record = Record::new(&USERS)
            .with("name", "bob")
            .with("birthday", "8/3/1997");
        let stmt = build_insert_with(&record, PlaceholderStyle::Format).unwrap();
        assert_eq!(stmt.sql, "INSERT INTO users (name, birthday) VALUES (%s, %s);");
    }

    #[test]
    fn test_values_never_interpolated() {
        let record = Record::new(&USERS)
            .with("name", "x'); DROP TABLE users; --")
            .with("birthday", "8/30/1999");
        let stmt = build_insert(&record).unwrap();
        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(
            stmt.values[0],
            Value::Text("x'); DROP TABLE users; --".to_string())
        );
    }

    #[test]
    fn test_invalid_descriptor_reported_before_attributes() {
        static BROKEN: Descriptor = Descriptor::new("", &["name"]);
        // No attributes either; the descriptor error wins
        let record = Record::new(&BROKEN);
        assert!(matches!(
            build_insert(&record),
            Err(RowMapError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn test_missing_attribute_names_column() {
        let record = Record::new(&USERS).with("name", "sam");
        match build_insert(&record) {
            Err(RowMapError::MissingAttribute { table, column }) => {
                assert_eq!(table, "users");
                assert_eq!(column, "birthday");
            }
            other => panic!("Expected MissingAttribute, got {:?}", other),
        }
    }
}
