//! # brt-client
//!
//! Leptos + WASM frontend for the BRT reservation management system.
//! Handles authentication, email verification, BRT CRUD, a statistics
//! dashboard, and a real-time notification feed over a broadcast channel.
//!
//! This crate contains pages, components, application state, and the
//! HTTP/WebSocket network layer. The API server is a separate service; this
//! crate only speaks its JSON envelope and broadcast protocol.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
