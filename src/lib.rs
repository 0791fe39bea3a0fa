//! # panel-client
//!
//! Leptos + WASM frontend for the control-panel application: a login
//! screen, a protected dashboard, and the session plumbing between them
//! (CSRF bootstrap, cookie-mirroring request interceptor, route guard).
//!
//! The backend is an external REST service under `/api/auth`; this crate
//! only owns the client half of the session lifecycle.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
