//! Console logging.
//!
//! Effects never report problems to the visitor; diagnostics go to the
//! browser console only. Calls compile to nothing off wasm32.

use crate::config::LOG_PREFIX;

/// Log a diagnostic line (hidden unless the console shows verbose output).
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&format!("{} {}", LOG_PREFIX, message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (LOG_PREFIX, message);
}

/// Log a warning.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("{} {}", LOG_PREFIX, message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (LOG_PREFIX, message);
}
