#![recursion_limit = "256"]
//! ADLAH site - marketing and service intake for the Adaptive Deep Learning
//! Anomaly Detection Honeynet.
//!
//! A Leptos web application rendered on the server and hydrated in the
//! browser, with a small JSON intake API for quote requests.

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
