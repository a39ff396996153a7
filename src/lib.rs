//! # train-gym-client
//!
//! Leptos + WASM frontend for the gym training log. Holds the session store
//! that every route reads, the guards that gate routes on it, the expiry
//! indicator, and the pages behind those guards.
//!
//! Talks to the REST backend with cookie sessions; no credential is ever
//! stored client-side.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    leptos::mount::hydrate_body(app::App);
}
