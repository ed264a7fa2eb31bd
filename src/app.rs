//! Page-level wiring.
//!
//! Every effect starts from a page lifecycle signal. The configuration block
//! sits in the markup, so nothing is read before `DOMContentLoaded`. The
//! menu, navbar and card effects start right there; the typewriter waits
//! for whichever signal its configuration names.

use folio_core::{EffectsConfig, StartTrigger};

use crate::components::{menu, navbar, pulse, typewriter};
use crate::config;
use crate::utils::{console, dom};

/// Load the page configuration once the markup is parsed, then start.
pub fn run() {
    on_lifecycle(StartTrigger::ContentReady, || start_effects(config::load()));
}

/// Start every configured effect.
///
/// Must run once the document is past `DOMContentLoaded`.
pub fn start_effects(config: EffectsConfig) {
    let EffectsConfig {
        typewriter: typewriter_config,
        menu: menu_config,
        navbar: navbar_config,
        pulse: pulse_config,
    } = config;

    menu::initialize(&menu_config);
    if let Some(cfg) = navbar_config {
        navbar::initialize(&cfg);
    }
    if let Some(cfg) = pulse_config {
        pulse::initialize(&cfg);
    }

    on_lifecycle(typewriter_config.trigger, move || {
        typewriter::start(&typewriter_config);
    });
}

/// Whether a document in `ready_state` has already passed `trigger`.
pub fn has_reached(ready_state: &str, trigger: StartTrigger) -> bool {
    match trigger {
        StartTrigger::ContentReady => ready_state != "loading",
        StartTrigger::Loaded => ready_state == "complete",
    }
}

/// Call `f` once `trigger` has fired, immediately if it already has.
pub fn on_lifecycle(trigger: StartTrigger, f: impl FnOnce() + 'static) {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if has_reached(&document.ready_state(), trigger) {
        f();
        return;
    }

    let registered = match trigger {
        StartTrigger::ContentReady => dom::listen_once(&document, "DOMContentLoaded", f),
        StartTrigger::Loaded => dom::listen_once(&window, "load", f),
    };
    if let Err(e) = registered {
        console::warn(&format!("lifecycle listener not registered: {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_reached() {
        assert!(!has_reached("loading", StartTrigger::ContentReady));
        assert!(has_reached("interactive", StartTrigger::ContentReady));
        assert!(has_reached("complete", StartTrigger::ContentReady));

        assert!(!has_reached("loading", StartTrigger::Loaded));
        assert!(!has_reached("interactive", StartTrigger::Loaded));
        assert!(has_reached("complete", StartTrigger::Loaded));
    }
}
