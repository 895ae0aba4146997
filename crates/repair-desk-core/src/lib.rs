//! Repair Desk Core
//!
//! Layered architecture:
//! - domain: Records stored in the remote database and static reference data
//! - gateway: Access to the hosted PostgREST endpoint (and an in-memory stand-in)
//! - repository: Typed table access on top of a gateway
//! - view: View-model state and the re-fetch-after-mutation policy

pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod repository;
pub mod view;

pub use config::GatewayConfig;
pub use error::{ConfigError, GatewayError, GatewayResult, SyncError};
pub use gateway::{Gateway, MemoryGateway, PostgrestGateway, SharedGateway};
