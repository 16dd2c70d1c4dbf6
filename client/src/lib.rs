//! # client
//!
//! Leptos + WASM frontend for Movie Review Hub: landing, login and
//! registration screens over the movie-review REST API.
//!
//! This crate contains pages, components, application state and the REST
//! helpers. It is compiled twice: with `hydrate` into the browser bundle and
//! with `ssr` into the `server` binary that renders the initial HTML.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating against API {}", config::api_base_url());
    leptos::mount::hydrate_body(app::App);
}
