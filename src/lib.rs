//! # credisol
//!
//! Browser client for the Credisol credit-application management system.
//! A Leptos + WASM frontend over a cookie-session API: authentication and
//! session state, role/permission route gating, CSRF double-submit
//! handling, and the form utilities the credit workflows need (peso
//! formatting, municipality catalog, credentialed document downloads).
//!
//! Pure logic compiles and tests natively; browser behavior is gated
//! behind the `hydrate` feature, and the `ssr` feature exposes the shell
//! for a server-render host.

pub mod app;
pub mod components;
pub mod env;
pub mod guards;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
