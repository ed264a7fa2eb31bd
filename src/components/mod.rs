//! Page effects, each attached to server-rendered markup.
//!
//! - [`typewriter`] - tagline typed out character by character
//! - [`menu`] - hamburger toggle for the navigation panel
//! - [`navbar`] - scrolled styling of the navbar
//! - [`pulse`] - click pulse on research cards
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod menu;
pub mod navbar;
pub mod pulse;
pub mod typewriter;
