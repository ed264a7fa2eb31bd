//! Typewriter effect on the tagline.
//!
//! Captures the element's text, then hands a [`TypewriterSession`] to a
//! local async task that sleeps on browser timers between ticks.

use folio_core::typewriter::{self, TextSurface, TypewriterConfig, TypewriterSession};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::TYPEWRITER_READY_ATTR;
use crate::utils::{console, dom};

/// [`TextSurface`] backed by an element's text content.
pub struct ElementSurface(Element);

impl ElementSurface {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl TextSurface for ElementSurface {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Start the effect on the element matching `config.selector`.
///
/// Returns `false` (and schedules nothing) when the element is missing or
/// already typed by an earlier start.
pub fn start(config: &TypewriterConfig) -> bool {
    match dom::query(&config.selector) {
        Ok(target) => start_on(target, config.clone()),
        Err(e) => {
            console::debug(&format!("typewriter skipped: {}", e));
            false
        }
    }
}

/// Start the effect on `target`.
///
/// The text is captured here, before the task runs, so nothing the page
/// does to the element afterwards changes what gets typed. A target marked
/// by an earlier start is left alone, otherwise a second session would
/// capture the half-typed prefix.
pub fn start_on(target: Element, config: TypewriterConfig) -> bool {
    if target.has_attribute(TYPEWRITER_READY_ATTR) {
        return false;
    }
    if target.set_attribute(TYPEWRITER_READY_ATTR, "").is_err() {
        console::debug("typewriter skipped: setAttribute failed");
        return false;
    }

    let surface = ElementSurface::new(target);
    let session = TypewriterSession::capture(&surface);

    spawn_local(async move {
        let session = typewriter::run(&surface, session, &config, TimeoutFuture::new).await;
        console::debug(&format!(
            "typewriter finished after {} characters",
            session.revealed_count()
        ));
    });
    true
}
