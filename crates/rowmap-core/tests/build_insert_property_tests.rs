#![allow(clippy::unwrap_used, clippy::expect_used)]

// Positional alignment and idempotence of build_insert over arbitrary entities

use proptest::prelude::*;
use rowmap_core::domain::User;
use rowmap_core::{build_insert, Descriptor, Entity, Record, RowMapError, Value};

static WIDE: Descriptor = Descriptor::new("wide", &["a", "b", "c", "d", "e"]);

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::Integer),
        any::<bool>().prop_map(Value::Boolean),
        ".*".prop_map(Value::Text),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(Value::Blob),
    ]
}

proptest! {
    #[test]
    fn values_align_with_columns(values in proptest::collection::vec(arb_value(), 5)) {
        let mut record = Record::new(&WIDE);
        for (column, value) in WIDE.columns().iter().zip(values.iter()) {
            record.set(column, value.clone());
        }

        let stmt = build_insert(&record).unwrap();

        prop_assert_eq!(stmt.values.len(), WIDE.columns().len());
        for (i, column) in WIDE.columns().iter().enumerate() {
            prop_assert_eq!(Some(stmt.values[i].clone()), record.attribute(column));
        }
    }

    #[test]
    fn build_insert_is_idempotent(name in ".*", birthday in ".*") {
        let user = User::new(name, birthday);

        let first = build_insert(&user).unwrap();
        let second = build_insert(&user).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn missing_any_column_fails(skip in 0usize..5) {
        let mut record = Record::new(&WIDE);
        for (i, column) in WIDE.columns().iter().enumerate() {
            if i != skip {
                record.set(column, i as i64);
            }
        }

        let err = build_insert(&record).unwrap_err();

        match err {
            RowMapError::MissingAttribute { column, .. } => {
                prop_assert_eq!(column.as_str(), WIDE.columns()[skip]);
            }
            other => {
                prop_assert!(false, "unexpected error: {:?}", other);
            }
        }
    }

    #[test]
    fn sql_text_independent_of_values(a in any::<i64>(), b in any::<i64>()) {
        let left = Record::new(&WIDE)
            .with("a", a).with("b", a).with("c", a).with("d", a).with("e", a);
        let right = Record::new(&WIDE)
            .with("a", b).with("b", b).with("c", b).with("d", b).with("e", b);

        prop_assert_eq!(build_insert(&left).unwrap().sql, build_insert(&right).unwrap().sql);
    }
}
