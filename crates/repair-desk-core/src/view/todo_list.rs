//! Todo List View Model
//!
//! State reducers plus the service that runs each mutation and re-reads the
//! whole collection afterwards.

use tracing::{debug, error};

use crate::domain::Todo;
use crate::error::{GatewayResult, SyncError};
use crate::gateway::{Order, SharedGateway};
use crate::repository::TodoRepository;

/// Server-side ordering of a todo view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoOrder {
    /// `created_at` descending
    #[default]
    NewestFirst,
    /// `id` ascending
    IdAscending,
}

impl TodoOrder {
    pub fn order(self) -> Order {
        match self {
            TodoOrder::NewestFirst => Order::desc("created_at"),
            TodoOrder::IdAscending => Order::asc("id"),
        }
    }
}

/// Snapshot, draft and loading flag of one todo view
#[derive(Debug, Clone, PartialEq)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
    pub draft: String,
    /// True until the initial load settles
    pub loading: bool,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListState {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            draft: String::new(),
            loading: true,
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Title to insert, or None for a blank draft
    pub fn submission(&self) -> Option<String> {
        if self.draft.trim().is_empty() {
            None
        } else {
            Some(self.draft.clone())
        }
    }

    /// Stored `completed` flag of a todo in the current snapshot
    pub fn completed_of(&self, id: i64) -> Option<bool> {
        self.todos.iter().find(|todo| todo.id == id).map(|todo| todo.completed)
    }

    /// Initial load: a failure leaves the list empty
    pub fn apply_load(&mut self, result: GatewayResult<Vec<Todo>>) {
        if let Ok(todos) = result {
            self.todos = todos;
        }
        self.loading = false;
    }

    /// The draft is cleared once the insert is acknowledged, even if the re-fetch fails
    pub fn apply_add(&mut self, result: Result<Vec<Todo>, SyncError>) {
        match result {
            Ok(todos) => {
                self.draft.clear();
                self.todos = todos;
            }
            Err(err) if err.mutation_applied() => self.draft.clear(),
            Err(_) => {}
        }
    }

    /// Toggle/delete: replace the snapshot wholesale on success
    pub fn apply_refresh(&mut self, result: Result<Vec<Todo>, SyncError>) {
        if let Ok(todos) = result {
            self.todos = todos;
        }
    }
}

/// Re-fetch-after-mutation policy over the `todos` collection
#[derive(Clone)]
pub struct TodoService {
    repo: TodoRepository,
    order: TodoOrder,
}

impl TodoService {
    pub fn new(gateway: SharedGateway, order: TodoOrder) -> Self {
        Self {
            repo: TodoRepository::new(gateway),
            order,
        }
    }

    pub fn order(&self) -> TodoOrder {
        self.order
    }

    /// Full collection in this view's order
    pub async fn fetch(&self) -> GatewayResult<Vec<Todo>> {
        match self.repo.list(&self.order.order()).await {
            Ok(todos) => {
                debug!(count = todos.len(), "[TodoList] fetched todos");
                Ok(todos)
            }
            Err(err) => {
                error!(error = %err, "[TodoList] Error fetching todos");
                Err(err)
            }
        }
    }

    /// Insert `{title, completed: false}` then re-fetch. Blank titles never reach the gateway.
    pub async fn add(&self, title: &str) -> Result<Vec<Todo>, SyncError> {
        if title.trim().is_empty() {
            return Err(SyncError::Blank);
        }
        let written = self.repo.insert(title).await;
        self.settle("adding", written).await
    }

    /// Store the inverse of `completed` then re-fetch
    pub async fn toggle(&self, id: i64, completed: bool) -> Result<Vec<Todo>, SyncError> {
        let written = self.repo.set_completed(id, !completed).await;
        self.settle("updating", written).await
    }

    pub async fn delete(&self, id: i64) -> Result<Vec<Todo>, SyncError> {
        let written = self.repo.delete(id).await;
        self.settle("deleting", written).await
    }

    async fn settle(&self, action: &str, written: GatewayResult<()>) -> Result<Vec<Todo>, SyncError> {
        if let Err(err) = written {
            error!(error = %err, "[TodoList] Error {} todo", action);
            return Err(SyncError::Mutation(err));
        }
        self.fetch().await.map_err(SyncError::Refresh)
    }
}
