//! Todo List Frontend
//!
//! - models / todos: todo records and the store that owns them
//! - store: reactive wrapper shared through Leptos context
//! - components / app: the UI

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod store;
pub mod todos;

pub use app::App;
pub use config::TodoConfig;
pub use error::{TodoError, TodoResult};
pub use models::{Filter, Todo, TodoId};
pub use todos::TodoStore;
