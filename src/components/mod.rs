//! UI Components
//!
//! Leptos components over the shared todo store.

mod filter_bar;
mod new_todo_form;
mod todo_footer;
mod todo_list_view;
mod todo_row;

pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use todo_footer::TodoFooter;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
