//! Task management module
//!
//! This module owns the task list and its JSON file:
//! - Task model with integer IDs and a done flag
//! - Ordered store with add / mark done / delete
//! - Load and save against `tasks.json`

pub mod error;
pub mod model;
pub mod store;

pub use error::{AddError, StoreError};
pub use model::{Task, TaskId};
pub use store::TaskStore;
