//! Todo-related types and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name length bounds, in characters, shared by lists and todos
pub const NAME_MIN_CHARS: usize = 1;
pub const NAME_MAX_CHARS: usize = 100;

/// Errors that can occur when validating or mutating todo state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Name must be between 1 and 100 characters.")]
    InvalidLength,

    #[error("List name must be unique.")]
    DuplicateName,

    #[error("List {0} does not exist.")]
    ListNotFound(usize),

    #[error("Todo {0} does not exist.")]
    TodoNotFound(usize),
}

/// A single todo item within a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Display name (1-100 characters)
    pub name: String,
    /// Whether the item has been checked off
    pub completed: bool,
}

impl Todo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

/// A named, ordered collection of todos.
///
/// Lists are addressed by their position in the session's list sequence;
/// positions shift when an earlier list is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Display name (1-100 characters, unique within the session)
    pub name: String,
    /// Ordered todo items
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mutator tests compare whole Result<Todo, _> / Result<TodoList, _>
    // values, so both structs need value equality.
    #[test]
    fn test_value_equality() {
        assert_eq!(Todo::new("milk"), Todo::new("milk"));
        assert_ne!(
            Todo::new("milk"),
            Todo {
                name: "milk".to_string(),
                completed: true,
            }
        );
        assert_eq!(TodoList::new("Chores"), TodoList::new("Chores"));
    }
}
