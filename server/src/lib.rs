//! Todolist Server Library
//!
//! This module exports the server components for use in integration tests
//! and external tooling.

pub mod config;
pub mod session;
pub mod todo;

// Re-export commonly used types
pub use session::{SessionData, SessionStore};
pub use todo::{TodoAppState, TodoError, todo_routes};
