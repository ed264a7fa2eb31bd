//! Platform-independent core of the site's presentation effects.
//!
//! Every effect is modelled as a small state machine that knows nothing
//! about the browser. The front end plugs DOM adapters into the seams:
//!
//! - [`TextSurface`] - where the typewriter writes its revealed prefix
//! - [`MenuView`] - panel visibility and toggle icon of the mobile menu
//!
//! Configuration ([`EffectsConfig`]) and error types live here too so the
//! whole behaviour can be tested on the host.

pub mod config;
pub mod error;
pub mod menu;
pub mod navbar;
pub mod pulse;
pub mod typewriter;

pub use config::{EffectsConfig, MenuConfig, NavbarConfig, PulseConfig};
pub use error::{ConfigError, DomError};
pub use menu::{ClickOrigin, MenuController, MenuIcon, MenuView};
pub use navbar::NavbarScroll;
pub use pulse::PulseState;
pub use typewriter::{
    ClearMode, StartTrigger, TextSurface, TypewriterConfig, TypewriterPhase, TypewriterSession,
};
