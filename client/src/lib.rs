//! # client
//!
//! Leptos + WASM frontend for Recipefy's sign-in flow.
//!
//! This crate contains the login view and its icon renderers, the provider
//! and session state, route pages, and the root `App`. The `ssr` feature is
//! consumed by the `server` crate; `hydrate` builds the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
