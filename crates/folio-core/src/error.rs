//! Error types shared by the core and the front end.
//!
//! - [`DomError`] - a configured element is missing or a DOM call failed
//! - [`ConfigError`] - the runtime configuration block is unusable
//!
//! Neither is ever surfaced to the visitor: a missing element disables one
//! decoration, a bad configuration falls back to the defaults.

use thiserror::Error;

/// DOM lookup and manipulation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Browser window or document not available
    #[error("document not available")]
    NoDocument,
    /// No element matches the selector
    #[error("no element matches '{selector}'")]
    NotFound { selector: String },
    /// The selector itself was rejected by the browser
    #[error("invalid selector '{selector}'")]
    InvalidSelector { selector: String },
    /// A DOM call threw (element creation, insertion, attributes)
    #[error("{0} failed")]
    Operation(&'static str),
}

impl DomError {
    pub fn not_found(selector: &str) -> Self {
        Self::NotFound {
            selector: selector.to_string(),
        }
    }

    pub fn invalid_selector(selector: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed into an [`EffectsConfig`](crate::EffectsConfig)
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Typewriter interval must be positive
    #[error("typewriter interval must be greater than 0 ms")]
    ZeroInterval,
    /// Pulse duration must be positive
    #[error("pulse duration must be greater than 0 ms")]
    ZeroPulseDuration,
    /// A selector or class name was left empty
    #[error("'{0}' must not be empty")]
    Empty(&'static str),
    /// A class name holds whitespace or a leading dot
    #[error("'{0}' must be a single class name")]
    InvalidClassName(&'static str),
    /// Navbar threshold must be a finite, non-negative offset
    #[error("navbar threshold must be a finite offset >= 0, got {0}")]
    InvalidThreshold(f64),
}
