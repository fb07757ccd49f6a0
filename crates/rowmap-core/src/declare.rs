//! Entity declaration macro
//!
//! `entity!` attaches a static [`Descriptor`](crate::Descriptor) to a struct
//! and implements [`Entity`](crate::Entity) from the same field list, so the
//! columns an insert writes and the attributes it reads cannot drift apart.

/// Declare a struct as a persistable entity
///
/// Columns default to the field name; `field => "column"` renames one.
/// Fields are read through [`ToValue`](crate::ToValue).
///
/// # Example
///
/// ```
/// use rowmap_core::{build_insert, entity};
///
/// struct Venue {
///     name: String,
///     city: String,
/// }
///
/// entity! {
///     Venue => "venues" { name, city => "city_name" }
/// }
///
/// let venue = Venue { name: "Chipotle".into(), city: "Denver".into() };
/// let stmt = build_insert(&venue).unwrap();
/// assert_eq!(stmt.sql, "INSERT INTO venues (name, city_name) VALUES (?, ?);");
/// assert_eq!(Venue::DESCRIPTOR.columns(), &["name", "city_name"]);
/// ```
#[macro_export]
macro_rules! entity {
    ($ty:ty => $table:literal { $($field:ident $(=> $column:literal)?),+ $(,)? }) => {
        impl $ty {
            /// Table metadata shared by every instance
            pub const DESCRIPTOR: $crate::Descriptor = $crate::Descriptor::new(
                $table,
                &[$($crate::__entity_column!($field $(, $column)?)),+],
            );
        }

        impl $crate::Entity for $ty {
            fn descriptor(&self) -> &$crate::Descriptor {
                static DESCRIPTOR: $crate::Descriptor = <$ty>::DESCRIPTOR;
                &DESCRIPTOR
            }

            fn attribute(&self, column: &str) -> ::std::option::Option<$crate::Value> {
                $(
                    if column == $crate::__entity_column!($field $(, $column)?) {
                        return ::std::option::Option::Some(
                            $crate::ToValue::to_value(&self.$field),
                        );
                    }
                )+
                ::std::option::Option::None
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entity_column {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $column:literal) => {
        $column
    };
}
