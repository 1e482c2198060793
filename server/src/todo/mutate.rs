//! List and todo mutators
//!
//! Every operation validates its target before touching state; no error path
//! leaves a partial mutation behind. Lists and todos are addressed by
//! position, so a delete shifts all subsequent siblings down by one.

use super::types::{Todo, TodoError, TodoList};
use super::validate;

/// Append a new empty list. Fails without mutating on an invalid or
/// duplicate name.
pub fn create_list(lists: &mut Vec<TodoList>, name: &str) -> Result<(), TodoError> {
    validate::list_name(name, lists)?;
    lists.push(TodoList::new(name));
    Ok(())
}

/// Rename the list at `index` in place.
///
/// The uniqueness check runs against every list, including the one being
/// renamed, so renaming a list to its own current name fails with
/// `DuplicateName`. Intentionally kept from the observed behavior.
pub fn rename_list(lists: &mut [TodoList], index: usize, new_name: &str) -> Result<(), TodoError> {
    if index >= lists.len() {
        return Err(TodoError::ListNotFound(index));
    }
    validate::list_name(new_name, lists)?;
    lists[index].name = new_name.to_string();
    Ok(())
}

/// Remove and return the list at `index`.
pub fn delete_list(lists: &mut Vec<TodoList>, index: usize) -> Result<TodoList, TodoError> {
    if index >= lists.len() {
        return Err(TodoError::ListNotFound(index));
    }
    Ok(lists.remove(index))
}

/// Append a todo (initially unchecked) to the list at `list_index`.
pub fn add_todo(lists: &mut [TodoList], list_index: usize, name: &str) -> Result<(), TodoError> {
    validate::todo_name(name)?;
    let list = lists
        .get_mut(list_index)
        .ok_or(TodoError::ListNotFound(list_index))?;
    list.todos.push(Todo::new(name));
    Ok(())
}

/// Set the completed flag on one todo. Idempotent.
pub fn set_todo_completed(
    lists: &mut [TodoList],
    list_index: usize,
    todo_index: usize,
    completed: bool,
) -> Result<(), TodoError> {
    let list = lists
        .get_mut(list_index)
        .ok_or(TodoError::ListNotFound(list_index))?;
    let todo = list
        .todos
        .get_mut(todo_index)
        .ok_or(TodoError::TodoNotFound(todo_index))?;
    todo.completed = completed;
    Ok(())
}

/// Remove and return the todo at `todo_index` within the list at `list_index`.
pub fn delete_todo(
    lists: &mut [TodoList],
    list_index: usize,
    todo_index: usize,
) -> Result<Todo, TodoError> {
    let list = lists
        .get_mut(list_index)
        .ok_or(TodoError::ListNotFound(list_index))?;
    if todo_index >= list.todos.len() {
        return Err(TodoError::TodoNotFound(todo_index));
    }
    Ok(list.todos.remove(todo_index))
}

/// Mark every todo in the list as completed. Idempotent.
pub fn complete_all(lists: &mut [TodoList], list_index: usize) -> Result<(), TodoError> {
    let list = lists
        .get_mut(list_index)
        .ok_or(TodoError::ListNotFound(list_index))?;
    for todo in &mut list.todos {
        todo.completed = true;
    }
    Ok(())
}
