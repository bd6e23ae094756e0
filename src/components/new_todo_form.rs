//! New Todo Form Component
//!
//! Input for the pending title; submit adds it to the list.

use leptos::prelude::*;

use crate::store::{update_todos, use_app_store, with_todos};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        update_todos(&store, |todos| {
            todos.add_pending();
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                class="new-todo"
                placeholder="What needs to be done?"
                autofocus
                prop:value=move || with_todos(&store, |todos| todos.pending_title().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    update_todos(&store, |todos| todos.set_pending_title(text));
                }
            />
        </form>
    }
}
