//! Frontend Models
//!
//! Todo record and display filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo identifier, unique across the live list
pub type TodoId = u32;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    /// UI-only: row is showing the edit input
    #[serde(default)]
    pub editing: bool,
    /// Creation time, used as the display sort key
    pub date: DateTime<Utc>,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            editing: false,
            date,
        }
    }
}

/// Display filter over the todo list. Never changes stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter in display order, with its button label
    pub const ALL: &'static [(Filter, &'static str)] = &[
        (Filter::All, "All"),
        (Filter::Active, "Active"),
        (Filter::Completed, "Completed"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(7, "Buy milk", Utc::now());
        assert_eq!(todo.id, 7);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert!(!todo.editing);
    }

    #[test]
    fn test_filter_strings() {
        assert_eq!(Filter::Active.as_str(), "active");
        assert_eq!(Filter::from_str("completed"), Filter::Completed);
        assert_eq!(Filter::from_str("bogus"), Filter::All);
        for (filter, _) in Filter::ALL {
            assert_eq!(Filter::from_str(filter.as_str()), *filter);
        }
    }

    #[test]
    fn test_filter_matches() {
        let mut todo = Todo::new(1, "x", Utc::now());
        assert!(Filter::All.matches(&todo));
        assert!(Filter::Active.matches(&todo));
        assert!(!Filter::Completed.matches(&todo));

        todo.completed = true;
        assert!(Filter::All.matches(&todo));
        assert!(!Filter::Active.matches(&todo));
        assert!(Filter::Completed.matches(&todo));
    }

    #[test]
    fn test_filter_serde() {
        let json = serde_json::to_string(&Filter::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let back: Filter = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, Filter::Completed);
    }
}
