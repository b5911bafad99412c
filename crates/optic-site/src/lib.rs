//! Optic Flow Exhibition Site
//!
//! A Leptos SSR site. The `ssr` build serves the page through axum, the
//! `hydrate` build is the WASM client that wires up scroll and reveal
//! animations.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
#[cfg(feature = "ssr")]
pub mod fileserv;
pub mod motion;
pub mod pages;

pub use error::SiteError;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
