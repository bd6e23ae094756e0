//! Todo List Frontend Entry Point

use leptos::prelude::*;
use todo_list::{logger, App, TodoConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = TodoConfig::load();
    logger::init_logger(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
