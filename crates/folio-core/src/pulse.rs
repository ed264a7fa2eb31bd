//! Click pulse on research cards.
//!
//! Each trigger starts a new generation; an expiry only clears the pulse if
//! it belongs to the latest generation, so rapid re-clicks restart the
//! animation instead of cutting it short.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseState {
    generation: u64,
    active: bool,
}

impl PulseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts (or restarts) the pulse. Returns the generation to expire later.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.generation
    }

    /// Ends the pulse started as `generation`.
    ///
    /// Returns `true` if the caller should remove the pulse class.
    pub fn expire(&mut self, generation: u64) -> bool {
        if !self.active || generation != self.generation {
            return false;
        }
        self.active = false;
        true
    }
}
