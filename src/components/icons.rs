//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons and
//! renders them as inline SVG for elements built outside a view tree.

use folio_core::MenuIcon;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{LuMenu as Bars, LuX as Cross};
}

mod bootstrap {
    pub use icondata::{BsList as Bars, BsXLg as Cross};
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BARS, Bars);
themed_icon!(CROSS, Cross);

/// Icon shown on the menu toggle for `icon`.
pub fn menu_icon(icon: MenuIcon) -> Icon {
    match icon {
        MenuIcon::Bars => BARS,
        MenuIcon::Cross => CROSS,
    }
}

/// Render an icon as an inline `<svg>` element sized to the font.
pub fn svg_markup(icon: Icon) -> String {
    let attrs = [
        ("viewBox", icon.view_box),
        ("stroke", icon.stroke),
        ("stroke-width", icon.stroke_width),
        ("stroke-linecap", icon.stroke_linecap),
        ("stroke-linejoin", icon.stroke_linejoin),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|v| format!(" {}=\"{}\"", name, v)))
    .collect::<String>();

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1em\" height=\"1em\" fill=\"{}\"{} aria-hidden=\"true\">{}</svg>",
        icon.fill.unwrap_or("currentColor"),
        attrs,
        icon.data
    )
}
