//! # client
//!
//! Leptos + WASM frontend for the product catalog.
//!
//! This crate contains the routing shell, pages, the product row component,
//! list state, and the REST helpers for the `/product` endpoints. The `ssr`
//! feature lets the host server render it; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
