//! Browser helpers shared by the components.
//!
//! Provides:
//! - [`dom`] - element lookup, event listeners, scroll offset
//! - [`console`] - prefixed console logging

pub mod console;
pub mod dom;
