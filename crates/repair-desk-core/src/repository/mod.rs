//! Repository Layer
//!
//! Typed access to the remote collections.

mod table;
mod todo_repo;
mod worker_repo;


pub use table::{decode_rows, Table};
pub use todo_repo::TodoRepository;
pub use worker_repo::WorkerRepository;
