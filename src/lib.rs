//! # autopost-signup
//!
//! Leptos + WASM signup page for the autoposting web application.
//!
//! The crate collects an email and a confirmed password, posts them to the
//! remote auth service, stores the returned access token in browser storage,
//! and routes the user to the dashboard. Browser-only glue sits behind the
//! `csr` feature so the form logic and submit flow test natively.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
