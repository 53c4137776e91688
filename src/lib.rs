//! # gallery
//!
//! Leptos + WASM frontend for the tagged image gallery.
//!
//! This crate contains the page, components, session state, API client and
//! the controller flows that tie fetching to rendering. The image viewer
//! overlay is an external script bound through `util::lightbox`.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
