//! Todo Repository
//!
//! The `todos` collection: list, insert, toggle, delete.

use crate::domain::{NewTodo, Todo, TodoPatch};
use crate::error::GatewayResult;
use crate::gateway::{Order, SharedGateway};

use super::table::Table;

#[derive(Clone)]
pub struct TodoRepository {
    table: Table<Todo>,
}

impl TodoRepository {
    pub fn new(gateway: SharedGateway) -> Self {
        Self {
            table: Table::new(gateway),
        }
    }

    /// Full collection in the given order
    pub async fn list(&self, order: &Order) -> GatewayResult<Vec<Todo>> {
        let query = self.table.query().order(order.clone());
        self.table.select(&query).await
    }

    /// Insert `{title, completed: false}`; the title is stored as typed
    pub async fn insert(&self, title: &str) -> GatewayResult<()> {
        self.table.insert(&NewTodo::new(title)).await
    }

    pub async fn set_completed(&self, id: i64, completed: bool) -> GatewayResult<()> {
        self.table.update(&id, &TodoPatch { completed }).await
    }

    pub async fn delete(&self, id: i64) -> GatewayResult<()> {
        self.table.delete(&id).await
    }
}
