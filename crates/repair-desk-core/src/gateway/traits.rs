//! Gateway Layer - Core Trait
//!
//! The four operations the views need from remote storage. Rows travel as
//! JSON; typed decoding happens in the repository layer.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::query::{Filter, Select};
use crate::error::GatewayResult;

/// Remote collection access
///
/// Futures are not `Send`: the browser backend resolves on the UI thread.
#[async_trait(?Send)]
pub trait Gateway: Send + Sync {
    /// List rows of a collection
    async fn select(&self, query: &Select) -> GatewayResult<Vec<Value>>;

    /// Insert one row (object) or several (array)
    async fn insert(&self, table: &str, rows: Value) -> GatewayResult<()>;

    /// Apply a partial update to every row matching the filters
    async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> GatewayResult<()>;

    /// Delete every row matching the filters
    async fn delete(&self, table: &str, filters: &[Filter]) -> GatewayResult<()>;
}

/// Gateway handle injected into every view
pub type SharedGateway = Arc<dyn Gateway>;
