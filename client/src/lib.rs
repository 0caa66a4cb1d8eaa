//! # zbook-client
//!
//! Leptos + WASM frontend for the zBook document summarizer. The UI signs a
//! user in, accepts one uploaded book file at a time, and renders the
//! AI-generated summaries the external backend returns.
//!
//! This crate contains pages, components, application state, network
//! wrappers, and utility helpers. All summarization, parsing, and persistence
//! happen behind the backend API; nothing here computes anything heavier than
//! display formatting.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
