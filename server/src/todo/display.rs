//! Presentation helpers
//!
//! Pure read-only functions computing derived display state. The sort
//! helpers are stable partitions (filter and concatenate), never comparator
//! sorts, so relative order within each group is preserved. Each entry keeps
//! its original position because positions are the addressing scheme for
//! every mutating route.

use super::types::{Todo, TodoList};

/// A list is complete when it has at least one todo and all of them are
/// checked off. An empty list is never complete.
pub fn is_list_complete(todos: &[Todo]) -> bool {
    !todos.is_empty() && todos.iter().all(|t| t.completed)
}

/// Number of unchecked todos.
pub fn count_incomplete(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

/// Display order for the list overview: incomplete lists first, complete
/// lists last, original relative order preserved within each group.
pub fn sorted_lists(lists: &[TodoList]) -> Vec<(&TodoList, usize)> {
    let incomplete = lists
        .iter()
        .enumerate()
        .filter(|(_, list)| !is_list_complete(&list.todos));
    let complete = lists
        .iter()
        .enumerate()
        .filter(|(_, list)| is_list_complete(&list.todos));

    incomplete
        .chain(complete)
        .map(|(index, list)| (list, index))
        .collect()
}

/// Display order for a list page: unchecked todos first, checked todos last,
/// original relative order preserved within each group.
pub fn sorted_todos(todos: &[Todo]) -> Vec<(&Todo, usize)> {
    let unchecked = todos.iter().enumerate().filter(|(_, t)| !t.completed);
    let checked = todos.iter().enumerate().filter(|(_, t)| t.completed);

    unchecked
        .chain(checked)
        .map(|(index, todo)| (todo, index))
        .collect()
}
