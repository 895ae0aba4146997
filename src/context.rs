//! Application Context
//!
//! The injected gateway, provided via Leptos Context API.

use leptos::prelude::*;
use repair_desk_core::view::{TodoOrder, TodoService, WorkerService};
use repair_desk_core::SharedGateway;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Gateway shared by every view
    gateway: StoredValue<SharedGateway>,
}

impl AppContext {
    pub fn new(gateway: SharedGateway) -> Self {
        Self {
            gateway: StoredValue::new(gateway),
        }
    }

    pub fn gateway(&self) -> SharedGateway {
        self.gateway.get_value()
    }

    pub fn todo_service(&self, order: TodoOrder) -> TodoService {
        TodoService::new(self.gateway(), order)
    }

    pub fn worker_service(&self) -> WorkerService {
        WorkerService::new(self.gateway())
    }
}
