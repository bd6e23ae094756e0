//! Todo Row Component
//!
//! A single todo: checkbox, title, delete button, and the inline edit input.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::{try_update_todos, update_todos, use_app_store};

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let editing = todo.editing;
    let title = todo.title;

    let row_class = match (completed, editing) {
        (true, true) => "todo-row completed editing",
        (true, false) => "todo-row completed",
        (false, true) => "todo-row editing",
        (false, false) => "todo-row",
    };

    if editing {
        let input_ref = NodeRef::<leptos::html::Input>::new();
        // Focus the edit input once it is mounted
        Effect::new(move |_| {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        });

        view! {
            <li class=row_class>
                <input
                    class="edit"
                    node_ref=input_ref
                    prop:value=title
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        try_update_todos(&store, |todos| todos.edit_title(id, text));
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => try_update_todos(&store, |todos| todos.commit_edit(id)),
                        "Escape" => try_update_todos(&store, |todos| todos.cancel_edit(id)),
                        _ => {}
                    }
                    on:blur=move |_| try_update_todos(&store, |todos| todos.commit_edit(id))
                />
            </li>
        }
        .into_any()
    } else {
        view! {
            <li class=row_class>
                <input
                    type="checkbox"
                    class="toggle"
                    checked=completed
                    on:change=move |_| try_update_todos(&store, |todos| todos.toggle(id))
                />
                <label
                    class="todo-title"
                    on:dblclick=move |_| try_update_todos(&store, |todos| todos.begin_edit(id))
                >
                    {title}
                </label>
                <button
                    class="destroy"
                    on:click=move |_| update_todos(&store, |todos| {
                        todos.remove(id);
                    })
                >
                    "×"
                </button>
            </li>
        }
        .into_any()
    }
}
