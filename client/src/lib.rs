//! # client
//!
//! Leptos + WASM frontend for the site builder.
//!
//! This crate contains the auth screens, the project dashboard and the visual
//! editor page. All page-composition logic lives in the `sitecraft` crate;
//! the editor page owns one `sitecraft::engine::EditorCore` in a signal,
//! forwards DOM events to it, and renders its state. Everything here is host
//! plumbing: routing, the signed-in user, toasts and the project list.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("console logging unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
