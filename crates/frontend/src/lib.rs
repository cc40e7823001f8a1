pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::load_config;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    // Mount only after config.toml is in, so the first requests use its API base
    spawn_local(async {
        load_config().await;
        leptos::mount::mount_to_body(app::App);
    });
}
