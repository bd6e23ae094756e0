//! Todo App
//!
//! Root component: builds the store from config and lays out the page.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoFooter, TodoListView};
use crate::config::TodoConfig;
use crate::store::provide_app_store;
use crate::todos::TodoStore;

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    let todos = TodoStore::with_seed(&config.seed_titles);
    log::info!("[APP] Started with {} todos", todos.len());
    provide_app_store(todos);

    view! {
        <section class="todoapp">
            <header class="header">
                <h1>"todos"</h1>
                <NewTodoForm />
            </header>

            <TodoListView />

            <TodoFooter show_filters=config.show_filters />
        </section>
    }
}
