//! View Layer
//!
//! View-model state for the list views and the services that keep it in
//! step with remote storage. Every mutation is followed by a full re-fetch;
//! the in-memory list is never patched locally.

mod liveness;
mod todo_list;
mod worker_search;


pub use liveness::Liveness;
pub use todo_list::{TodoListState, TodoOrder, TodoService};
pub use worker_search::{
    no_engineers_message, ConnectionStatus, RegionQuery, RepairRequest, RequestField,
    WorkerSearchState, WorkerService, SEARCH_FAILED_MESSAGE,
};
