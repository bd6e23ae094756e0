//! Todo List View Component
//!
//! Filtered todos, newest first, with the toggle-all checkbox.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::models::Todo;
use crate::store::{update_todos, use_app_store, with_todos};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let visible = move || {
        with_todos(&store, |todos| {
            todos.visible_items().into_iter().cloned().collect::<Vec<Todo>>()
        })
    };
    let all_completed =
        move || with_todos(&store, |todos| !todos.is_empty() && todos.remaining_count() == 0);

    view! {
        <section class="main">
            <input
                id="toggle-all"
                class="toggle-all"
                type="checkbox"
                prop:checked=all_completed
                on:change=move |_| update_todos(&store, |todos| todos.toggle_all())
            />
            <label for="toggle-all">"Mark all as complete"</label>

            <ul class="todo-list">
                <For
                    each=visible
                    key=|todo| {
                        // The title is left out while editing so typing does
                        // not rebuild the row and drop focus
                        (
                            todo.id,
                            todo.completed,
                            todo.editing,
                            (!todo.editing).then(|| todo.title.clone()),
                        )
                    }
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </ul>
        </section>
    }
}
