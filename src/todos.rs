//! Todo Store
//!
//! Owns the todo list, the pending new-item text, per-todo edit caches and
//! the display filter. All mutation goes through the methods here.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::config::SAMPLE_TITLES;
use crate::error::{TodoError, TodoResult};
use crate::models::{Filter, Todo, TodoId};

#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    /// Text typed into the new-item input
    pending_title: String,
    /// Title of each todo as it was before its edit began
    edit_cache: HashMap<TodoId, String>,
    /// Next id to hand out. Only ever increases, so ids are never reused.
    next_id: TodoId,
    filter: Filter,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            pending_title: String::new(),
            edit_cache: HashMap::new(),
            next_id: 1,
            filter: Filter::All,
        }
    }

    /// Store seeded with the built-in sample entries
    pub fn initialize() -> Self {
        Self::with_seed(SAMPLE_TITLES)
    }

    /// Store seeded with `titles`, ids 1..=n, all stamped with the same time
    pub fn with_seed<S: AsRef<str>>(titles: &[S]) -> Self {
        let now = Utc::now();
        let todos: Vec<Todo> = titles
            .iter()
            .zip(1..)
            .map(|(title, id)| Todo::new(id, title.as_ref(), now))
            .collect();
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        debug!("[STORE] Seeded {} todos, next id {}", todos.len(), next_id);
        Self {
            todos,
            next_id,
            ..Self::new()
        }
    }

    // ========================
    // Accessors
    // ========================

    /// Todos in insertion order
    pub fn items(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn next_id(&self) -> TodoId {
        self.next_id
    }

    pub fn pending_title(&self) -> &str {
        &self.pending_title
    }

    pub fn set_pending_title(&mut self, text: impl Into<String>) {
        self.pending_title = text.into();
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug!("[STORE] Filter -> {}", filter.as_str());
        self.filter = filter;
    }

    fn get_mut(&mut self, id: TodoId) -> TodoResult<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    // ========================
    // Mutations
    // ========================

    /// Add the pending title as a new todo, clearing it on success
    pub fn add_pending(&mut self) -> Option<TodoId> {
        let title = self.pending_title.clone();
        self.add(title)
    }

    /// Append a new todo created now. Blank titles are ignored.
    pub fn add(&mut self, title: impl Into<String>) -> Option<TodoId> {
        self.add_at(title, Utc::now())
    }

    /// Append a new todo with an explicit creation time
    pub fn add_at(&mut self, title: impl Into<String>, date: DateTime<Utc>) -> Option<TodoId> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }
        let id = self.next_id;
        self.todos.push(Todo::new(id, title, date));
        self.next_id += 1;
        self.pending_title.clear();
        debug!("[STORE] Added todo {}", id);
        Some(id)
    }

    /// Enter edit mode, remembering the current title for cancel/revert
    pub fn begin_edit(&mut self, id: TodoId) -> TodoResult<()> {
        let todo = self.get_mut(id)?;
        todo.editing = true;
        let saved = todo.title.clone();
        self.edit_cache.insert(id, saved);
        debug!("[STORE] Editing todo {}", id);
        Ok(())
    }

    /// Write in-progress text into a todo that is being edited
    pub fn edit_title(&mut self, id: TodoId, text: impl Into<String>) -> TodoResult<()> {
        let todo = self.get_mut(id)?;
        if !todo.editing {
            return Err(TodoError::NotEditing(id));
        }
        todo.title = text.into();
        Ok(())
    }

    /// Leave edit mode keeping the new title, unless it is blank, in which
    /// case the pre-edit title comes back. Non-blank titles are kept untrimmed.
    pub fn commit_edit(&mut self, id: TodoId) -> TodoResult<()> {
        let cached = self.edit_cache.remove(&id);
        let todo = self.get_mut(id)?;
        if todo.title.trim().is_empty() {
            if let Some(cached) = cached {
                todo.title = cached;
            }
        }
        todo.editing = false;
        debug!("[STORE] Committed edit of todo {}", id);
        Ok(())
    }

    /// Leave edit mode restoring the pre-edit title
    pub fn cancel_edit(&mut self, id: TodoId) -> TodoResult<()> {
        let cached = self.edit_cache.remove(&id);
        let todo = self.get_mut(id)?;
        if let Some(cached) = cached {
            todo.title = cached;
        }
        todo.editing = false;
        debug!("[STORE] Cancelled edit of todo {}", id);
        Ok(())
    }

    pub fn toggle(&mut self, id: TodoId) -> TodoResult<()> {
        let todo = self.get_mut(id)?;
        todo.completed = !todo.completed;
        debug!("[STORE] Todo {} completed={}", id, todo.completed);
        Ok(())
    }

    /// Remove the todo with `id`. Returns false (and changes nothing) if absent.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.edit_cache.remove(&id);
        let removed = self.todos.len() != before;
        if removed {
            debug!("[STORE] Removed todo {}", id);
        } else {
            warn!("[STORE] Remove of unknown todo {}", id);
        }
        removed
    }

    pub fn clear_completed(&mut self) {
        let cache = &mut self.edit_cache;
        self.todos.retain(|t| {
            if t.completed {
                cache.remove(&t.id);
            }
            !t.completed
        });
        debug!("[STORE] Cleared completed, {} left", self.todos.len());
    }

    /// If anything is completed, mark everything active; otherwise mark
    /// everything completed.
    pub fn toggle_all(&mut self) {
        let completed = !self.has_any_completed();
        for todo in &mut self.todos {
            todo.completed = completed;
        }
        debug!("[STORE] Toggled all to completed={}", completed);
    }

    // ========================
    // Queries
    // ========================

    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn has_any_completed(&self) -> bool {
        self.todos.iter().any(|t| t.completed)
    }

    /// Completed todos in insertion order
    pub fn completed_items(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| t.completed).collect()
    }

    /// Todos passing the current filter, newest first. Equal dates keep
    /// insertion order. The stored order is not touched.
    pub fn sorted_items(&self) -> Vec<&Todo> {
        let mut items: Vec<&Todo> = self
            .todos
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    /// What the list view shows
    pub fn visible_items(&self) -> Vec<&Todo> {
        self.sorted_items()
    }
}
