//! Domain entities persisted by the application

use crate::entity;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    /// Stored as entered, e.g. `8/30/1999`
    pub birthday: String,
}

impl User {
    pub fn new(name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
        }
    }
}

entity! {
    User => "users" { name, birthday }
}

/// A place users can visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub name: String,
}

impl Venue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

entity! {
    Venue => "venues" { name }
}
