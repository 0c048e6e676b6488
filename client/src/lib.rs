//! # client
//!
//! Leptos + WASM frontend for the Life & Conditioning coaching site.
//!
//! This crate contains the single landing page, its section components,
//! page state (theme, scroll, reveal, contact form, UI chrome), the contact
//! submission transport, and browser helpers. The `ssr` build is rendered by
//! the root server crate; the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
