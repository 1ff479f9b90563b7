//! # client
//!
//! Leptos + WASM frontend for the CRM assistant.
//!
//! This crate contains the assistant page, its display components, the page
//! state model, and the REST helper that talks to `POST /query`. The server
//! crate renders it with SSR and the browser hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then hydrate
/// the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
