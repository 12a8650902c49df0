//! # rental-client
//!
//! Leptos + WASM frontend for the car rental site. Customers browse and book
//! vehicles; company staff use the dashboard to review their fleet, drivers,
//! bookings, and damage reports.
//!
//! This crate contains pages, components, client state, and the REST helpers
//! for the external rental API. The `server` crate links it with the `ssr`
//! feature to render the HTML shell; the browser build uses `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
