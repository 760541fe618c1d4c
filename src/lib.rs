//! # fintrack-client
//!
//! Leptos + WASM frontend for the personal finance tracker.
//!
//! The heart of the crate is the authentication session: `storage` persists
//! the credential token pair, `net` holds the anonymous/authorized HTTP
//! channel pair and the user API service, and `state::session` drives the
//! restore/login/signup/logout lifecycle behind the shared `AuthState`
//! context. `pages` and `components` consume that contract.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
