//! Mobile navigation menu.
//!
//! [`MenuController`] owns the single `is_open` flag and pushes every change
//! to a [`MenuView`] before returning, so the panel and the toggle icon
//! never lag behind the state.

/// Icon shown on the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger bars, shown while the panel is closed.
    Bars,
    /// Cross, shown while the panel is open.
    Cross,
}

impl MenuIcon {
    pub fn for_state(is_open: bool) -> Self {
        if is_open { Self::Cross } else { Self::Bars }
    }

    /// Accessible label of the button showing this icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bars => "Open navigation menu",
            Self::Cross => "Close navigation menu",
        }
    }

    /// Stable name used in the `data-icon` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::Cross => "cross",
        }
    }
}

/// Where a document-level click started, relative to the nav container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    Inside,
    Outside,
}

/// Presentation side of the menu.
pub trait MenuView {
    /// Show or hide the link panel.
    fn set_panel_open(&self, open: bool);
    /// Swap the toggle button's icon.
    fn set_icon(&self, icon: MenuIcon);
}

/// Open/closed state machine for the navigation panel.
pub struct MenuController<V> {
    view: V,
    is_open: bool,
}

impl<V: MenuView> MenuController<V> {
    /// Creates a closed controller and renders the closed state.
    pub fn new(view: V) -> Self {
        let controller = Self {
            view,
            is_open: false,
        };
        controller.render();
        controller
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn icon(&self) -> MenuIcon {
        MenuIcon::for_state(self.is_open)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Flips the panel. Returns the new `is_open`.
    pub fn on_toggle_click(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.render();
        self.is_open
    }

    /// Closes the panel on an outside click while open.
    ///
    /// Returns `true` if the state changed.
    pub fn on_document_click(&mut self, origin: ClickOrigin) -> bool {
        if !self.is_open || origin == ClickOrigin::Inside {
            return false;
        }
        self.is_open = false;
        self.render();
        true
    }

    fn render(&self) {
        self.view.set_panel_open(self.is_open);
        self.view.set_icon(self.icon());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingView {
        panel_open: RefCell<Option<bool>>,
        icon: RefCell<Option<MenuIcon>>,
        writes: RefCell<usize>,
    }

    impl MenuView for RecordingView {
        fn set_panel_open(&self, open: bool) {
            *self.panel_open.borrow_mut() = Some(open);
            *self.writes.borrow_mut() += 1;
        }

        fn set_icon(&self, icon: MenuIcon) {
            *self.icon.borrow_mut() = Some(icon);
            *self.writes.borrow_mut() += 1;
        }
    }

    fn assert_in_sync(menu: &MenuController<RecordingView>) {
        assert_eq!(*menu.view().panel_open.borrow(), Some(menu.is_open()));
        assert_eq!(
            *menu.view().icon.borrow(),
            Some(MenuIcon::for_state(menu.is_open()))
        );
    }

    #[test]
    fn test_starts_closed_and_rendered() {
        let menu = MenuController::new(RecordingView::default());
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
        assert_in_sync(&menu);
    }

    #[test]
    fn test_toggle_parity() {
        let mut menu = MenuController::new(RecordingView::default());
        for n in 1..=7 {
            menu.on_toggle_click();
            assert_eq!(menu.is_open(), n % 2 == 1);
            assert_in_sync(&menu);
        }
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut menu = MenuController::new(RecordingView::default());
        menu.on_toggle_click();
        assert!(menu.on_document_click(ClickOrigin::Outside));
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
        assert_in_sync(&menu);
    }

    #[test]
    fn test_outside_click_while_closed_is_ignored() {
        let mut menu = MenuController::new(RecordingView::default());
        let writes = *menu.view().writes.borrow();

        assert!(!menu.on_document_click(ClickOrigin::Outside));
        assert!(!menu.is_open());
        assert_eq!(*menu.view().writes.borrow(), writes);
    }

    #[test]
    fn test_inside_click_keeps_menu_open() {
        let mut menu = MenuController::new(RecordingView::default());
        menu.on_toggle_click();

        // The toggle's own click bubbles to the document as an inside click.
        assert!(!menu.on_document_click(ClickOrigin::Inside));
        assert!(menu.is_open());
        assert_in_sync(&menu);
    }

    #[test]
    fn test_icon_labels() {
        assert_eq!(MenuIcon::for_state(true), MenuIcon::Cross);
        assert_eq!(MenuIcon::Cross.name(), "cross");
        assert_eq!(MenuIcon::Bars.label(), "Open navigation menu");
    }
}
