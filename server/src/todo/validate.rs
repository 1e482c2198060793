//! Name validation rules
//!
//! Pure checks applied before any mutation. Callers are expected to trim
//! whitespace before validating.

use super::types::{NAME_MAX_CHARS, NAME_MIN_CHARS, TodoError, TodoList};

fn name_in_bounds(name: &str) -> bool {
    let len = name.chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len)
}

/// Validate a list name: length in [1,100] characters and unique
/// (case-sensitive exact match) among the existing lists.
pub fn list_name(name: &str, existing: &[TodoList]) -> Result<(), TodoError> {
    if !name_in_bounds(name) {
        return Err(TodoError::InvalidLength);
    }
    if existing.iter().any(|list| list.name == name) {
        return Err(TodoError::DuplicateName);
    }
    Ok(())
}

/// Validate a todo name: length in [1,100] characters.
pub fn todo_name(name: &str) -> Result<(), TodoError> {
    if !name_in_bounds(name) {
        return Err(TodoError::InvalidLength);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(list_name("", &[]), Err(TodoError::InvalidLength));
        assert_eq!(todo_name(""), Err(TodoError::InvalidLength));
    }

    #[test]
    fn test_name_too_long_rejected() {
        let long = "x".repeat(101);
        assert_eq!(list_name(&long, &[]), Err(TodoError::InvalidLength));
        assert_eq!(todo_name(&long), Err(TodoError::InvalidLength));
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        assert!(list_name("x", &[]).is_ok());
        assert!(list_name(&"x".repeat(100), &[]).is_ok());
        assert!(todo_name("x").is_ok());
        assert!(todo_name(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 100 multi-byte characters is 300 bytes but still a valid name
        let name = "\u{00e9}".repeat(100);
        assert!(todo_name(&name).is_ok());
    }

    #[test]
    fn test_duplicate_list_name_rejected() {
        let existing = vec![TodoList::new("Groceries")];
        assert_eq!(
            list_name("Groceries", &existing),
            Err(TodoError::DuplicateName)
        );
    }

    #[test]
    fn test_uniqueness_is_case_sensitive() {
        let existing = vec![TodoList::new("Groceries")];
        assert!(list_name("groceries", &existing).is_ok());
    }

    #[test]
    fn test_fresh_name_accepted() {
        let existing = vec![TodoList::new("Groceries")];
        assert!(list_name("Errands", &existing).is_ok());
    }
}
