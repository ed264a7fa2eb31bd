//! DOM-level tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use folio::app;
use folio::components::{menu, navbar, pulse, typewriter};
use folio::config::{self, MENU_READY_ATTR, PULSE_STYLE_ID, TYPEWRITER_READY_ATTR};
use folio::utils::dom;
use folio_core::{
    ClearMode, EffectsConfig, MenuConfig, NavbarConfig, PulseConfig, StartTrigger,
    TypewriterConfig,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mounts `html` in a fresh wrapper appended to `<body>`.
fn fixture(html: &str) -> Element {
    let document = dom::document().unwrap();
    let wrapper = document.create_element("div").unwrap();
    wrapper.set_inner_html(html);
    document.body().unwrap().append_child(&wrapper).unwrap();
    wrapper
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn menu_config(id: &str) -> MenuConfig {
    MenuConfig {
        container: format!("#{}-nav", id),
        panel: format!("#{}-links", id),
        ..MenuConfig::default()
    }
}

fn menu_fixture(id: &str) -> Element {
    fixture(&format!(
        r#"<nav id="{id}-nav"><a class="logo">home</a><ul id="{id}-links"><li><a id="{id}-link">papers</a></li></ul></nav>
           <p id="{id}-outside">body text</p>"#
    ))
}

#[wasm_bindgen_test]
fn menu_inserts_toggle_before_panel() {
    let root = menu_fixture("insert");
    let config = menu_config("insert");
    assert!(menu::initialize(&config).is_some());

    let panel = dom::query("#insert-links").unwrap();
    let button = panel.previous_element_sibling().unwrap();
    assert_eq!(button.tag_name(), "BUTTON");
    assert!(button.class_list().contains("mobile-menu-button"));
    assert_eq!(button.get_attribute("data-icon").as_deref(), Some("bars"));
    assert!(dom::query("#insert-nav").unwrap().has_attribute(MENU_READY_ATTR));

    root.remove();
}

#[wasm_bindgen_test]
fn menu_toggle_and_outside_click() {
    let root = menu_fixture("toggle");
    let handle = menu::initialize(&menu_config("toggle")).unwrap();
    let panel = dom::query("#toggle-links").unwrap();
    let button = dom::query("#toggle-nav button.mobile-menu-button").unwrap();

    click(&button);
    assert!(handle.borrow().is_open());
    assert!(panel.class_list().contains("active"));
    assert_eq!(button.get_attribute("data-icon").as_deref(), Some("cross"));

    // Clicks inside the container keep the panel open.
    click(&dom::query("#toggle-link").unwrap());
    assert!(handle.borrow().is_open());

    click(&dom::query("#toggle-outside").unwrap());
    assert!(!handle.borrow().is_open());
    assert!(!panel.class_list().contains("active"));
    assert_eq!(button.get_attribute("data-icon").as_deref(), Some("bars"));

    // Outside click while closed changes nothing.
    click(&dom::query("#toggle-outside").unwrap());
    assert!(!handle.borrow().is_open());

    // Toggle twice returns to closed.
    click(&button);
    click(&button);
    assert!(!handle.borrow().is_open());
    assert!(!panel.class_list().contains("active"));

    root.remove();
}

#[wasm_bindgen_test]
fn menu_initialize_is_idempotent() {
    let root = menu_fixture("again");
    let config = menu_config("again");
    let handle = menu::initialize(&config).unwrap();
    assert!(menu::initialize(&config).is_none());

    let buttons = dom::query_all("#again-nav button").unwrap();
    assert_eq!(buttons.len(), 1);

    // A single listener pair: one click opens.
    click(&buttons[0]);
    assert!(handle.borrow().is_open());

    root.remove();
}

#[wasm_bindgen_test]
fn menu_reuses_existing_button() {
    let root = fixture(
        r#"<nav id="reuse-nav"><button class="mobile-menu-button" id="reuse-btn"></button><ul id="reuse-links"></ul></nav>"#,
    );
    let handle = menu::initialize(&menu_config("reuse")).unwrap();
    assert_eq!(dom::query_all("#reuse-nav button").unwrap().len(), 1);

    click(&dom::query("#reuse-btn").unwrap());
    assert!(handle.borrow().is_open());

    root.remove();
}

#[wasm_bindgen_test]
fn menu_missing_panel_is_noop() {
    let root = fixture(r#"<nav id="bare-nav"></nav>"#);
    assert!(menu::initialize(&menu_config("bare")).is_none());
    assert!(dom::query_all("#bare-nav button").unwrap().is_empty());
    assert!(!dom::query("#bare-nav").unwrap().has_attribute(MENU_READY_ATTR));

    root.remove();
}

#[wasm_bindgen_test]
fn typewriter_missing_target_is_noop() {
    let config = TypewriterConfig {
        selector: "#no-such-tagline".to_string(),
        ..TypewriterConfig::default()
    };
    assert!(!typewriter::start(&config));
}

#[wasm_bindgen_test]
async fn typewriter_reveals_tagline() {
    let root = fixture(r#"<p id="typed">Hi there</p>"#);
    let config = TypewriterConfig {
        selector: "#typed".to_string(),
        interval_ms: 5,
        start_delay_ms: 0,
        clear: ClearMode::Immediately,
        ..TypewriterConfig::default()
    };
    assert!(typewriter::start(&config));

    TimeoutFuture::new(1).await;
    let partial = dom::query("#typed").unwrap().text_content().unwrap();
    assert!("Hi there".starts_with(&partial));
    assert!(partial.len() < "Hi there".len());

    TimeoutFuture::new(300).await;
    assert_eq!(
        dom::query("#typed").unwrap().text_content().as_deref(),
        Some("Hi there")
    );

    root.remove();
}

#[wasm_bindgen_test]
async fn typewriter_second_start_is_noop() {
    let root = fixture(r#"<p id="typed-twice">Hello</p>"#);
    let config = TypewriterConfig {
        selector: "#typed-twice".to_string(),
        interval_ms: 5,
        start_delay_ms: 0,
        clear: ClearMode::Immediately,
        ..TypewriterConfig::default()
    };
    assert!(typewriter::start(&config));

    TimeoutFuture::new(12).await;
    assert!(!typewriter::start(&config));

    let tagline = dom::query("#typed-twice").unwrap();
    assert!(tagline.has_attribute(TYPEWRITER_READY_ATTR));

    TimeoutFuture::new(300).await;
    assert_eq!(tagline.text_content().as_deref(), Some("Hello"));

    root.remove();
}

#[wasm_bindgen_test]
fn navbar_missing_is_noop() {
    let config = NavbarConfig {
        selector: "#no-such-navbar".to_string(),
        ..NavbarConfig::default()
    };
    assert!(!navbar::initialize(&config));
}

#[wasm_bindgen_test]
fn navbar_wires_once() {
    let root = fixture(r#"<header id="bar"></header>"#);
    let config = NavbarConfig {
        selector: "#bar".to_string(),
        ..NavbarConfig::default()
    };
    assert!(navbar::initialize(&config));
    assert!(!navbar::initialize(&config));

    root.remove();
}

#[wasm_bindgen_test]
fn navbar_class_follows_threshold() {
    let root = fixture(r#"<header id="scroll-bar"></header><div style="height: 5000px"></div>"#);
    let window = dom::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let config = NavbarConfig {
        selector: "#scroll-bar".to_string(),
        threshold: 10.0,
        ..NavbarConfig::default()
    };
    assert!(navbar::initialize(&config));
    let bar = dom::query("#scroll-bar").unwrap();
    assert!(!bar.class_list().contains("scrolled"));

    let scroll = |y: f64| {
        window.scroll_to_with_x_and_y(0.0, y);
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    };

    scroll(100.0);
    assert!(bar.class_list().contains("scrolled"));

    scroll(5.0);
    assert!(!bar.class_list().contains("scrolled"));

    scroll(0.0);
    root.remove();
}

#[wasm_bindgen_test]
async fn pulse_adds_and_removes_class() {
    let root = fixture(r#"<div class="card-under-test"></div><div class="card-under-test"></div>"#);
    let config = PulseConfig {
        selector: ".card-under-test".to_string(),
        duration_ms: 50,
        ..PulseConfig::default()
    };
    assert_eq!(pulse::initialize(&config), 2);
    assert_eq!(pulse::initialize(&config), 0);
    assert!(dom::document().unwrap().get_element_by_id(PULSE_STYLE_ID).is_some());

    let card = dom::query(".card-under-test").unwrap();
    click(&card);
    assert!(card.class_list().contains("pulse"));

    TimeoutFuture::new(30).await;
    // Re-click restarts the pulse; the first expiry must not clear it.
    click(&card);
    TimeoutFuture::new(30).await;
    assert!(card.class_list().contains("pulse"));

    TimeoutFuture::new(60).await;
    assert!(!card.class_list().contains("pulse"));

    root.remove();
}

#[wasm_bindgen_test]
fn pulse_without_cards_is_noop() {
    let config = PulseConfig {
        selector: ".no-such-card".to_string(),
        ..PulseConfig::default()
    };
    assert_eq!(pulse::initialize(&config), 0);
}

#[wasm_bindgen_test]
fn config_override_block_is_applied() {
    let root = fixture(&format!(
        r##"<script type="application/json" id="{}">
            {{ "typewriter": {{ "interval_ms": 100, "trigger": "loaded" }}, "menu": {{ "panel": "#links" }}, "pulse": null }}
        </script>"##,
        config::CONFIG_ELEMENT_ID
    ));

    let loaded = config::load();
    assert_eq!(loaded.typewriter.interval_ms, 100);
    assert_eq!(loaded.typewriter.trigger, StartTrigger::Loaded);
    assert_eq!(loaded.menu.panel, "#links");
    assert!(loaded.pulse.is_none());

    root.remove();
}

#[wasm_bindgen_test]
fn config_invalid_block_falls_back_to_defaults() {
    let root = fixture(&format!(
        r#"<script type="application/json" id="{}">{{ "typewriter": {{ "interval_ms": 0 }} }}</script>"#,
        config::CONFIG_ELEMENT_ID
    ));
    assert_eq!(config::load(), EffectsConfig::default());
    root.remove();

    let root = fixture(&format!(
        r#"<script type="application/json" id="{}">not json</script>"#,
        config::CONFIG_ELEMENT_ID
    ));
    assert_eq!(config::load(), EffectsConfig::default());
    root.remove();
}

#[wasm_bindgen_test]
fn config_without_block_is_default() {
    assert!(dom::document()
        .unwrap()
        .get_element_by_id(config::CONFIG_ELEMENT_ID)
        .is_none());
    assert_eq!(config::load(), EffectsConfig::default());
}

#[wasm_bindgen_test]
fn lifecycle_past_signal_runs_immediately() {
    // The test page has finished loading by the time tests run.
    assert_eq!(dom::document().unwrap().ready_state(), "complete");

    for trigger in [StartTrigger::ContentReady, StartTrigger::Loaded] {
        let ran = Rc::new(Cell::new(false));
        app::on_lifecycle(trigger, {
            let ran = ran.clone();
            move || ran.set(true)
        });
        assert!(ran.get());
    }
}
