//! # client
//!
//! Leptos + WASM frontend for MediLocate, the pharmacy locator.
//!
//! The crate holds the session core (token store, session state, route
//! guard, role router), the REST client for the MediLocate backend, and the
//! pages built on top of them. The host binary renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
