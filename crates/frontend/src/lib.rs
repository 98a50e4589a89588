pub mod app;
pub mod chat;
pub mod dashboard;
pub mod layout;
pub mod ledger;
pub mod routes;
pub mod shared;
pub mod system;
pub mod traces;
pub mod visualize;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
