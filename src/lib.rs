//! # linkbin
//!
//! Leptos + WASM single-page client for the LinkBin bookmarking service.
//! The client authenticates a user (form login/signup or a magic-link
//! callback), keeps the session in one localStorage slot, and shows a
//! paginated feed of saved links. All persistence and business logic lives
//! behind the remote HTTP API; this crate is the session and data-sync
//! layer plus the pages that drive it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
