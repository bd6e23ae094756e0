//! Global Application State Store
//!
//! Wraps the `TodoStore` in a Leptos reactive_stores store so components
//! re-render when it changes.

use leptos::prelude::*;
use log::warn;
use reactive_stores::Store;

use crate::error::TodoResult;
use crate::todos::TodoStore;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub todos: TodoStore,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Create the store and provide it to all children
pub fn provide_app_store(todos: TodoStore) -> AppStore {
    let store = Store::new(AppState { todos });
    provide_context(store);
    store
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read from the todo store, tracking the read
pub fn with_todos<R>(store: &AppStore, f: impl FnOnce(&TodoStore) -> R) -> R {
    store.todos().with(f)
}

/// Run an infallible mutation
pub fn update_todos(store: &AppStore, f: impl FnOnce(&mut TodoStore)) {
    store.todos().update(f);
}

/// Run an id-addressed mutation, logging a failure instead of surfacing it
pub fn try_update_todos(store: &AppStore, f: impl FnOnce(&mut TodoStore) -> TodoResult<()>) {
    store.todos().update(|todos| {
        if let Err(e) = f(todos) {
            warn!("[STORE] {}", e);
        }
    });
}
