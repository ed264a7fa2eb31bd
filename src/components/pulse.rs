//! Click pulse on research cards.
//!
//! A click adds the pulse class and schedules its removal; the keyframes
//! are injected into `<head>` once.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{DomError, PulseConfig, PulseState};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::{PULSE_READY_ATTR, PULSE_STYLE_ID};
use crate::utils::{console, dom};

/// Stylesheet animating `.{class}` for `duration_ms`.
pub fn keyframes_css(class: &str, duration_ms: u32) -> String {
    format!(
        "@keyframes {class} {{\n  0% {{ transform: scale(1); }}\n  50% {{ transform: scale(1.05); }}\n  100% {{ transform: scale(1); }}\n}}\n.{class} {{\n  animation: {class} {duration_ms}ms ease-in-out;\n}}\n"
    )
}

/// Wire every card matching `config.selector`.
///
/// Returns the number of cards newly wired.
pub fn initialize(config: &PulseConfig) -> usize {
    match try_initialize(config) {
        Ok(count) => count,
        Err(e) => {
            console::debug(&format!("card pulse skipped: {}", e));
            0
        }
    }
}

fn try_initialize(config: &PulseConfig) -> Result<usize, DomError> {
    let cards: Vec<Element> = dom::query_all(&config.selector)?
        .into_iter()
        .filter(|card| !card.has_attribute(PULSE_READY_ATTR))
        .collect();

    if cards.is_empty() {
        return Ok(0);
    }

    inject_style(config)?;

    for card in &cards {
        wire(card, config)?;
    }
    Ok(cards.len())
}

fn inject_style(config: &PulseConfig) -> Result<(), DomError> {
    let document = dom::document().ok_or(DomError::NoDocument)?;
    if document.get_element_by_id(PULSE_STYLE_ID).is_some() {
        return Ok(());
    }

    let head = document.head().ok_or(DomError::not_found("head"))?;
    let style = document
        .create_element("style")
        .map_err(|_| DomError::Operation("createElement"))?;
    style.set_id(PULSE_STYLE_ID);
    style.set_text_content(Some(&keyframes_css(&config.class, config.duration_ms)));
    head.append_child(&style)
        .map_err(|_| DomError::Operation("appendChild"))?;
    Ok(())
}

fn wire(card: &Element, config: &PulseConfig) -> Result<(), DomError> {
    let state = Rc::new(RefCell::new(PulseState::new()));
    let class = config.class.clone();
    let duration_ms = config.duration_ms;

    dom::listen(card, "click", {
        let card = card.clone();
        move |_| {
            let generation = state.borrow_mut().trigger();

            // Re-adding the class only restarts the animation after a reflow.
            let _ = card.class_list().remove_1(&class);
            if let Some(el) = card.dyn_ref::<HtmlElement>() {
                let _ = el.offset_width();
            }
            let _ = card.class_list().add_1(&class);

            let card = card.clone();
            let class = class.clone();
            let state = state.clone();
            Timeout::new(duration_ms, move || {
                if state.borrow_mut().expire(generation) {
                    let _ = card.class_list().remove_1(&class);
                }
            })
            .forget();
        }
    })?;

    card.set_attribute(PULSE_READY_ATTR, "")
        .map_err(|_| DomError::Operation("setAttribute"))
}
