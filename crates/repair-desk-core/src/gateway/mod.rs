//! Gateway Layer
//!
//! Thin access to the hosted database's REST API, plus an in-memory
//! implementation with the same semantics.

mod memory;
mod postgrest;
mod query;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::{Call, MemoryGateway, Operation};
pub use postgrest::PostgrestGateway;
pub use query::{Direction, Filter, Order, Select};
pub use traits::{Gateway, SharedGateway};
