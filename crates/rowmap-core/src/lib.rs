//! rowmap Core - generic object-to-row persistence mapper
//!
//! This crate provides:
//! - Static per-type table metadata ([`Descriptor`]) and the [`Entity`] capability
//! - The `entity!` macro for declaring persistable structs
//! - Parameterized insert construction ([`build_insert`])
//! - Single-row persistence against any [`backend::Connection`] ([`persist`])
//! - Structured error and logging facilities
//!
//! # Example
//!
//! ```
//! use rowmap_core::build_insert;
//! use rowmap_core::domain::User;
//!
//! let sam = User::new("sam", "8/30/1999");
//! let stmt = build_insert(&sam).unwrap();
//!
//! assert_eq!(stmt.sql, "INSERT INTO users (name, birthday) VALUES (?, ?);");
//! assert_eq!(stmt.values.len(), 2);
//! ```

pub mod backend;
pub mod declare;
pub mod domain;
pub mod errors;
pub mod logging_facility;
pub mod mapper;
pub mod model;

// Re-export commonly used types
pub use backend::{Connection, Cursor};
pub use errors::{ExError, ExErrorKind, Result, RowMapError};
pub use mapper::{build_insert, build_insert_with, persist, InsertStatement, PlaceholderStyle};
pub use model::{Descriptor, Entity, Record, ToValue, Value};

// Used by the exported macros
#[doc(hidden)]
pub use rowmap_core_types as core_types;
#[doc(hidden)]
pub use tracing;
