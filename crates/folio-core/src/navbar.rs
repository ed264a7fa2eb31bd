//! Scroll-triggered navbar styling.

/// Tracks whether the page is scrolled past a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarScroll {
    threshold: f64,
    scrolled: bool,
}

impl NavbarScroll {
    /// Creates a tracker at the top of the page.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feeds a scroll offset.
    ///
    /// Returns the new state only when it crossed the threshold.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let scrolled = offset > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}
