//! Domain Layer - Core Entity Trait
//!
//! Every record this app reads lives in a remote collection and is
//! addressed by a single key column.

use std::fmt::Display;

/// Core trait for all remote records
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the record's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Display + Send + Sync;

    /// Remote collection holding this record
    const TABLE: &'static str;

    /// Key column used by update-by-key and delete-by-key
    const KEY: &'static str = "id";

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}
