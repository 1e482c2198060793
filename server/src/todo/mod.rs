//! Todo list core
//!
//! This module provides:
//! - the `TodoList`/`Todo` data model
//! - `validate` for name rules, `mutate` for state changes
//! - `display` for pure presentation helpers (completion, partition sorts)
//! - HTTP routes and the HTML views they render

pub mod display;
pub mod mutate;
pub mod routes;
pub mod types;
pub mod validate;
mod views;

pub use routes::{TodoAppState, todo_routes};
pub use types::{Todo, TodoError, TodoList};
