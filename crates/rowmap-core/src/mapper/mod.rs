//! Row mapper
//!
//! Turns an entity into a parameterized `INSERT` and, optionally, runs it
//! against a backend connection.

pub mod insert;
pub mod persist;
pub mod placeholder;

pub use insert::{build_insert, build_insert_with, InsertStatement};
pub use persist::persist;
pub use placeholder::PlaceholderStyle;
