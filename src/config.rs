//! Application configuration.
//!
//! Centralizes the constants the effects share and loads the optional
//! runtime override block from the host page.

use folio_core::EffectsConfig;

use crate::utils::{console, dom};

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Load the effects configuration.
///
/// Falls back to [`EffectsConfig::default`] when the page carries no
/// override block, and logs a warning when the block is invalid.
pub fn load() -> EffectsConfig {
    let Some(json) = dom::document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return EffectsConfig::default();
    };

    if json.trim().is_empty() {
        return EffectsConfig::default();
    }

    EffectsConfig::from_json(&json).unwrap_or_else(|e| {
        console::warn(&format!("#{} ignored: {}", CONFIG_ELEMENT_ID, e));
        EffectsConfig::default()
    })
}

// =============================================================================
// DOM Markers
// =============================================================================

/// Attribute marking a tagline the typewriter already owns.
pub const TYPEWRITER_READY_ATTR: &str = "data-typewriter-ready";

/// Attribute marking a nav container whose menu is already wired.
pub const MENU_READY_ATTR: &str = "data-menu-ready";

/// Attribute marking a navbar whose scroll listener is already wired.
pub const NAVBAR_READY_ATTR: &str = "data-scroll-ready";

/// Attribute marking a card whose pulse listener is already wired.
pub const PULSE_READY_ATTR: &str = "data-pulse-ready";

/// Id of the injected pulse keyframes stylesheet.
pub const PULSE_STYLE_ID: &str = "folio-pulse-style";

// =============================================================================
// Logging
// =============================================================================

/// Prefix of every console line written by this crate.
pub const LOG_PREFIX: &str = "[folio]";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme of the menu toggle.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
