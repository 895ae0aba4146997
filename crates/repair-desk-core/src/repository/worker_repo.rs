//! Worker Repository
//!
//! Read-only access to the `workers` collection.

use crate::domain::Worker;
use crate::error::GatewayResult;
use crate::gateway::{Order, SharedGateway};

use super::table::Table;

#[derive(Clone)]
pub struct WorkerRepository {
    table: Table<Worker>,
}

impl WorkerRepository {
    pub fn new(gateway: SharedGateway) -> Self {
        Self {
            table: Table::new(gateway),
        }
    }

    /// Number of sampled rows (0 or 1); rows are not decoded, so only
    /// transport and remote failures surface
    pub async fn probe(&self) -> GatewayResult<usize> {
        let query = self.table.query().limit(1);
        self.table.count(&query).await
    }

    /// Exact match on city and district, ordered by `sort_order` ascending
    pub async fn find_by_region(&self, city: &str, district: &str) -> GatewayResult<Vec<Worker>> {
        let query = self
            .table
            .query()
            .eq("city", city)
            .eq("district", district)
            .order(Order::asc("sort_order"));
        self.table.select(&query).await
    }
}
