//! Runtime configuration of the presentation effects.
//!
//! The host page may embed a JSON object overriding any subset of the
//! defaults. Missing fields fall back to [`EffectsConfig::academic`];
//! `null` for an optional effect disables it.
//!
//! ```json
//! {
//!   "typewriter": { "interval_ms": 100, "start_delay_ms": 0, "trigger": "loaded" },
//!   "navbar": { "threshold": 50 },
//!   "pulse": null
//! }
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::typewriter::{ClearMode, StartTrigger, TypewriterConfig};

/// Mobile menu selectors and class names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Navigation container (receives the toggle button).
    pub container: String,
    /// Collapsible link panel.
    pub panel: String,
    /// Class of the synthesized toggle button.
    pub button_class: String,
    /// Class marking the panel as expanded.
    pub active_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            container: ".nav-content".to_string(),
            panel: ".nav-links".to_string(),
            button_class: "mobile-menu-button".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Navbar scroll styling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    /// Scroll offset (px) past which the navbar counts as scrolled.
    pub threshold: f64,
    pub scrolled_class: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            selector: ".navbar".to_string(),
            threshold: 0.0,
            scrolled_class: "scrolled".to_string(),
        }
    }
}

/// Research card click pulse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub selector: String,
    pub class: String,
    pub duration_ms: u32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            selector: ".research-card".to_string(),
            class: "pulse".to_string(),
            duration_ms: 1000,
        }
    }
}

/// Configuration of every effect on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub typewriter: TypewriterConfig,
    pub menu: MenuConfig,
    pub navbar: Option<NavbarConfig>,
    pub pulse: Option<PulseConfig>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self::academic()
    }
}

impl EffectsConfig {
    /// Fast typing after a two second pause, subtle navbar border on any
    /// scroll, pulsing research cards.
    pub fn academic() -> Self {
        Self {
            typewriter: TypewriterConfig::default(),
            menu: MenuConfig::default(),
            navbar: Some(NavbarConfig::default()),
            pulse: Some(PulseConfig::default()),
        }
    }

    /// Slower typing started on `load`, navbar background change after
    /// 50px, no card pulse.
    pub fn classic() -> Self {
        Self {
            typewriter: TypewriterConfig {
                interval_ms: 100,
                start_delay_ms: 0,
                clear: ClearMode::Immediately,
                trigger: StartTrigger::Loaded,
                ..TypewriterConfig::default()
            },
            menu: MenuConfig::default(),
            navbar: Some(NavbarConfig {
                threshold: 50.0,
                ..NavbarConfig::default()
            }),
            pulse: None,
        }
    }

    /// Parses and validates a JSON override block.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the effects rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("typewriter.selector", &self.typewriter.selector)?;
        if self.typewriter.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        non_empty("menu.container", &self.menu.container)?;
        non_empty("menu.panel", &self.menu.panel)?;
        class_name("menu.button_class", &self.menu.button_class)?;
        class_name("menu.active_class", &self.menu.active_class)?;

        if let Some(navbar) = &self.navbar {
            non_empty("navbar.selector", &navbar.selector)?;
            class_name("navbar.scrolled_class", &navbar.scrolled_class)?;
            if !navbar.threshold.is_finite() || navbar.threshold < 0.0 {
                return Err(ConfigError::InvalidThreshold(navbar.threshold));
            }
        }

        if let Some(pulse) = &self.pulse {
            non_empty("pulse.selector", &pulse.selector)?;
            class_name("pulse.class", &pulse.class)?;
            if pulse.duration_ms == 0 {
                return Err(ConfigError::ZeroPulseDuration);
            }
        }

        Ok(())
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Empty(field))
    } else {
        Ok(())
    }
}

/// A single class token, usable both in `classList` calls and in a
/// `button.{class}` selector.
fn class_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) || value.starts_with('.') {
        return Err(ConfigError::InvalidClassName(field));
    }
    Ok(())
}
