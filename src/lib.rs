//! Presentation effects for a static academic site, compiled to WebAssembly.
//!
//! The page is server-rendered; this crate only enhances it:
//!
//! - [`components::typewriter`] - typed-out tagline
//! - [`components::menu`] - mobile hamburger menu
//! - [`components::navbar`] - navbar styling once the page is scrolled
//! - [`components::pulse`] - click pulse on research cards
//!
//! State machines live in `folio-core`; this crate adapts them to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod utils;

/// Installs the panic hook and schedules the effects on the page
/// lifecycle signals.
pub fn start() {
    console_error_panic_hook::set_once();
    app::run();
}
