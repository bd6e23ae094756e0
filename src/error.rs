//! Todo Errors
//!
//! Blank titles are never errors; they are rejected or reverted silently.

use thiserror::Error;

use crate::models::TodoId;

/// Errors from id-addressed store operations and config loading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No live todo has this id
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// Title was written to a todo that is not being edited
    #[error("Todo {0} is not being edited")]
    NotEditing(TodoId),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Config(err.to_string())
    }
}

/// Common result type for store operations
pub type TodoResult<T> = Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TodoError::NotFound(4).to_string(), "Todo not found: 4");
        assert_eq!(
            TodoError::NotEditing(2).to_string(),
            "Todo 2 is not being edited"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let todo_err: TodoError = err.into();
        assert!(matches!(todo_err, TodoError::Config(_)));
    }
}
