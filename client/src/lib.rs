//! # eternelles-client
//!
//! Leptos + WASM frontend for the Eternelles event portal login screen.
//!
//! This crate contains the login page, its form state, the credential
//! authenticator that walks the configured API bases, and the session
//! persistence that hands the signed-in user to the rest of the app.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
