use super::descriptor::Descriptor;
use super::value::Value;

/// A value that can be persisted as one row
///
/// Implementors expose their table metadata and a by-name attribute lookup.
/// Any type satisfying both qualifies; there is no base type to inherit.
/// Prefer the [`entity!`](crate::entity) macro, which keeps the column list
/// and the attribute lookup in sync.
pub trait Entity {
    /// Shared table metadata for this entity
    fn descriptor(&self) -> &Descriptor;

    /// Read the attribute backing `column`
    ///
    /// Returns `None` when the entity has no such attribute.
    fn attribute(&self, column: &str) -> Option<Value>;
}

impl<E: Entity + ?Sized> Entity for &E {
    fn descriptor(&self) -> &Descriptor {
        (**self).descriptor()
    }

    fn attribute(&self, column: &str) -> Option<Value> {
        (**self).attribute(column)
    }
}
