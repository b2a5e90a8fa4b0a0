//! # client
//!
//! Leptos + WASM front end for the DevHire landing page.
//!
//! The crate is compiled twice: with `ssr` for server rendering inside the
//! `server` binary, and with `hydrate` for the browser bundle. Widget rules
//! live in `state`; `components` and `pages` are reactive shells over them.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;


/// Browser entry point called by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
