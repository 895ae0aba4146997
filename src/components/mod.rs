//! UI Components
//!
//! Reusable Leptos components.

mod connection_badge;
mod delete_button;
mod new_todo_form;
mod todo_list;
mod todo_row;
mod view_tab_bar;
mod worker_card;
mod worker_search;

pub use connection_badge::ConnectionBadge;
pub use delete_button::DeleteButton;
pub use new_todo_form::NewTodoForm;
pub use todo_list::{TodoList, TodoVariant};
pub use todo_row::TodoRow;
pub use view_tab_bar::{AppView, ViewTabBar};
pub use worker_card::WorkerCard;
pub use worker_search::WorkerSearch;
