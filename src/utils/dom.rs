//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Lookups return
//! [`DomError`] so callers can decide to skip an effect quietly.

use folio_core::DomError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the current window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Find the first element matching `selector` in the document.
pub fn query(selector: &str) -> Result<Element, DomError> {
    let document = document().ok_or(DomError::NoDocument)?;
    document
        .query_selector(selector)
        .map_err(|_| DomError::invalid_selector(selector))?
        .ok_or_else(|| DomError::not_found(selector))
}

/// Find the first descendant of `parent` matching `selector`.
pub fn query_within(parent: &Element, selector: &str) -> Result<Element, DomError> {
    parent
        .query_selector(selector)
        .map_err(|_| DomError::invalid_selector(selector))?
        .ok_or_else(|| DomError::not_found(selector))
}

/// Find every element matching `selector` in the document.
///
/// An empty result is not an error.
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let document = document().ok_or(DomError::NoDocument)?;
    let list = document
        .query_selector_all(selector)
        .map_err(|_| DomError::invalid_selector(selector))?;

    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Current vertical scroll offset of the window, 0 when unavailable.
pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| DomError::Operation("addEventListener"))?;

    // Keep the closure alive for the lifetime of the page
    closure.forget();
    Ok(())
}

/// Attach `handler` to `event` on `target`, to be called at most once.
pub fn listen_once(
    target: &EventTarget,
    event: &str,
    handler: impl FnOnce() + 'static,
) -> Result<(), DomError> {
    let callback = Closure::once_into_js(handler);
    target
        .add_event_listener_with_callback(event, callback.unchecked_ref())
        .map_err(|_| DomError::Operation("addEventListener"))
}
