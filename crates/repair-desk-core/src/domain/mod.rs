//! Domain Layer
//!
//! Records owned by the remote database plus the static region table.
//! This layer has NO network dependencies (serde and chrono only).

mod entity;
mod todo;
mod worker;
pub mod regions;

pub use entity::Entity;
pub use todo::{NewTodo, Todo, TodoPatch};
pub use worker::Worker;
