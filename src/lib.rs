//! # storefront
//!
//! Leptos + WASM client for a single storefront page: a theme toggle, a
//! product card with an add-to-cart notice, and a validated registration form.
//!
//! Form decisions live in the browser-free `forms` crate. This crate holds
//! the page's reactive state, its components, and the thin browser glue
//! (theme preference, timers) that degrades to no-ops outside the `csr`
//! build so everything else can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("storefront starting");
    leptos::mount::mount_to_body(app::App);
}
