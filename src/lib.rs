//! # daily-tasks
//!
//! Leptos + WASM client for the Daily Tasks todo app.
//!
//! This crate contains the app shell, the redirect-based auth provider,
//! pages, components, client state, and the REST helpers for the identity
//! server and the todo API. The `server` crate renders it with SSR and serves
//! the hydrate bundle.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
