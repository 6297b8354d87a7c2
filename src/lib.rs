//! # backoffice-client
//!
//! Leptos + WASM frontend shell for the back-office application.
//!
//! This crate holds the browser session layer (restore on load, login,
//! logout), the REST client it drives, the layout configuration mapping routes
//! to headings, and the pages and components wired around them.
//!
//! There is no server half here: `hydrate()` expects the page to be rendered
//! by a host server (e.g. `leptos_axum`) that serves [`app::shell`].

pub mod app;
pub mod components;
pub mod config;
pub mod layout;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Route `log` output to the browser console and report panics there.
#[cfg(feature = "hydrate")]
pub fn install_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    install_browser_logging();
    leptos::mount::hydrate_body(app::App);
}
