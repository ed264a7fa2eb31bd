//! Mobile navigation menu.
//!
//! Wires a [`MenuController`] to the page: a toggle button inside the nav
//! container flips the link panel, and a click anywhere outside the
//! container closes it.
//!
//! Clicks are classified by their dispatch path, not by the target node:
//! the toggle handler swaps the button's SVG, which detaches the original
//! target before the event bubbles to the document. The path still holds
//! the container, so the toggle's own click reaches the document listener
//! as [`ClickOrigin::Inside`].

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ClickOrigin, DomError, MenuConfig, MenuController, MenuIcon, MenuView};
use web_sys::{Element, Event, Node};

use crate::components::icons;
use crate::config::MENU_READY_ATTR;
use crate::utils::{console, dom};

/// Menu controller shared by the event listeners.
pub type SharedMenu = Rc<RefCell<MenuController<DomMenuView>>>;

/// [`MenuView`] over the link panel and the toggle button.
pub struct DomMenuView {
    panel: Element,
    button: Element,
    active_class: String,
}

impl MenuView for DomMenuView {
    fn set_panel_open(&self, open: bool) {
        let _ = self
            .panel
            .class_list()
            .toggle_with_force(&self.active_class, open);
    }

    fn set_icon(&self, icon: MenuIcon) {
        self.button
            .set_inner_html(&icons::svg_markup(icons::menu_icon(icon)));
        let _ = self.button.set_attribute("aria-label", icon.label());
        let _ = self.button.set_attribute("data-icon", icon.name());
    }
}

/// Set up the menu described by `config`.
///
/// Returns `None` when the container or panel is missing, or when the
/// container was already initialized.
pub fn initialize(config: &MenuConfig) -> Option<SharedMenu> {
    match try_initialize(config) {
        Ok(menu) => menu,
        Err(e) => {
            console::debug(&format!("menu skipped: {}", e));
            None
        }
    }
}

fn try_initialize(config: &MenuConfig) -> Result<Option<SharedMenu>, DomError> {
    let document = dom::document().ok_or(DomError::NoDocument)?;
    let container = dom::query(&config.container)?;
    let panel = dom::query(&config.panel)?;

    if container.has_attribute(MENU_READY_ATTR) {
        return Ok(None);
    }

    let button = match dom::query_within(&container, &format!("button.{}", config.button_class)) {
        Ok(existing) => existing,
        Err(_) => {
            let button = document
                .create_element("button")
                .map_err(|_| DomError::Operation("createElement"))?;
            button.set_class_name(&config.button_class);
            button
                .set_attribute("type", "button")
                .map_err(|_| DomError::Operation("setAttribute"))?;
            insert_toggle(&container, &panel, &button)?;
            button
        }
    };

    let menu: SharedMenu = Rc::new(RefCell::new(MenuController::new(DomMenuView {
        panel,
        button: button.clone(),
        active_class: config.active_class.clone(),
    })));

    dom::listen(&button, "click", {
        let menu = menu.clone();
        move |_| {
            menu.borrow_mut().on_toggle_click();
        }
    })?;

    dom::listen(&document, "click", {
        let menu = menu.clone();
        let container = container.clone();
        move |event: Event| {
            let origin = click_origin(&container, &event);
            menu.borrow_mut().on_document_click(origin);
        }
    })?;

    container
        .set_attribute(MENU_READY_ATTR, "")
        .map_err(|_| DomError::Operation("setAttribute"))?;

    Ok(Some(menu))
}

/// Insert the toggle right before the panel, or at the end of the container
/// when the panel lives elsewhere.
fn insert_toggle(container: &Element, panel: &Element, button: &Element) -> Result<(), DomError> {
    let panel_node: &Node = panel;
    let parent = panel
        .parent_node()
        .filter(|_| container.contains(Some(panel_node)));

    let inserted = match parent {
        Some(parent) => parent.insert_before(button, Some(panel_node)),
        None => container.append_child(button),
    };
    inserted
        .map(|_| ())
        .map_err(|_| DomError::Operation("insertBefore"))
}

/// Classify a click by whether `container` is on its dispatch path.
fn click_origin(container: &Element, event: &Event) -> ClickOrigin {
    let path: js_sys::Array = event.composed_path();
    if path.includes(container, 0) {
        ClickOrigin::Inside
    } else {
        ClickOrigin::Outside
    }
}
