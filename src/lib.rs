//! Loyaltify - marketing site for the Loyaltify loyalty platform
//!
//! Server-rendered with Leptos and hydrated in the browser. Locale
//! resolution, cookie consent and the demo request form live in [`core`]
//! behind small port traits; [`ui`] wires them to the DOM.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
