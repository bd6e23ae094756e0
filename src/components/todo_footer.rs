//! Todo Footer Component
//!
//! Remaining count, filter bar, and clear-completed button.

use leptos::prelude::*;

use crate::components::FilterBar;
use crate::store::{update_todos, use_app_store, with_todos};

fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

#[component]
pub fn TodoFooter(show_filters: bool) -> impl IntoView {
    let store = use_app_store();

    let remaining = move || with_todos(&store, |todos| todos.remaining_count());
    let has_completed = move || with_todos(&store, |todos| todos.has_any_completed());

    view! {
        <footer class="footer">
            <span class="todo-count">{move || items_left_label(remaining())}</span>

            <Show when=move || show_filters>
                <FilterBar />
            </Show>

            <Show when=has_completed>
                <button
                    class="clear-completed"
                    on:click=move |_| update_todos(&store, |todos| todos.clear_completed())
                >
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(5), "5 items left");
    }
}
