//! Navbar scroll styling.
//!
//! Adds the scrolled class once the page moves past the configured offset.
//! The DOM is only touched when [`NavbarScroll`] reports a crossing.

use folio_core::{DomError, NavbarConfig, NavbarScroll};
use web_sys::Element;

use crate::config::NAVBAR_READY_ATTR;
use crate::utils::{console, dom};

/// Set up scroll styling for the navbar described by `config`.
///
/// Returns `false` when the navbar is missing or already wired.
pub fn initialize(config: &NavbarConfig) -> bool {
    match try_initialize(config) {
        Ok(wired) => wired,
        Err(e) => {
            console::debug(&format!("navbar effect skipped: {}", e));
            false
        }
    }
}

fn try_initialize(config: &NavbarConfig) -> Result<bool, DomError> {
    let window = dom::window().ok_or(DomError::NoDocument)?;
    let navbar = dom::query(&config.selector)?;

    if navbar.has_attribute(NAVBAR_READY_ATTR) {
        return Ok(false);
    }

    let class = config.scrolled_class.clone();
    let mut state = NavbarScroll::new(config.threshold);
    state.observe(dom::scroll_offset());
    apply(&navbar, &class, state.is_scrolled());

    dom::listen(&window, "scroll", {
        let navbar = navbar.clone();
        move |_| {
            if let Some(scrolled) = state.observe(dom::scroll_offset()) {
                apply(&navbar, &class, scrolled);
            }
        }
    })?;

    navbar
        .set_attribute(NAVBAR_READY_ATTR, "")
        .map_err(|_| DomError::Operation("setAttribute"))?;
    Ok(true)
}

fn apply(navbar: &Element, class: &str, scrolled: bool) {
    let _ = navbar.class_list().toggle_with_force(class, scrolled);
}
