//! C&G Corp Web Frontend
//!
//! Leptos-based WASM frontend for the marketing site. Behaviour and copy
//! live in `site-core`; this crate binds them to the DOM.

mod app;
mod components;
mod hooks;
mod pages;
mod sink;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
