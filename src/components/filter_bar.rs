//! Filter Bar Component
//!
//! All / Active / Completed selector buttons.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{update_todos, use_app_store, with_todos};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let current = move || with_todos(&store, |todos| todos.filter());

    view! {
        <ul class="filters">
            {Filter::ALL.iter().map(|(filter, label)| {
                let filter = *filter;
                let is_selected = move || current() == filter;
                view! {
                    <li>
                        <button
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| update_todos(&store, |todos| todos.set_filter(filter))
                        >
                            {*label}
                        </button>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
