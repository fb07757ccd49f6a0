use std::collections::BTreeMap;

use super::descriptor::Descriptor;
use super::entity::Entity;
use super::value::{ToValue, Value};

/// Dynamically populated entity
///
/// Holds attributes by name and borrows the descriptor it is persisted
/// under. Useful when the attribute set is assembled at runtime while the
/// table metadata stays static.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'d> {
    descriptor: &'d Descriptor,
    attributes: BTreeMap<String, Value>,
}

impl<'d> Record<'d> {
    /// Create an empty record for `descriptor`
    pub fn new(descriptor: &'d Descriptor) -> Self {
        Self {
            descriptor,
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute (builder form)
    pub fn with(mut self, name: &str, value: impl ToValue) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute in place
    pub fn set(&mut self, name: &str, value: impl ToValue) {
        self.attributes.insert(name.to_string(), value.to_value());
    }

    /// Remove an attribute, returning its previous value
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Number of attributes currently set
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true when no attribute is set
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Entity for Record<'_> {
    fn descriptor(&self) -> &Descriptor {
        self.descriptor
    }

    fn attribute(&self, column: &str) -> Option<Value> {
        self.attributes.get(column).cloned()
    }
}
