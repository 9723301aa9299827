//! Scroll-direction-aware header state.
//!
//! Three modes, edge-triggered on direction change: scrolling down from
//! anywhere enters `Scrolled`, scrolling back up while `Scrolled` enters
//! `ScrollUp`, and returning to the top always rests. Repeated events in the
//! same direction do not retrigger a transition.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    #[default]
    Resting,
    Scrolled,
    ScrollUp,
}

#[derive(Debug, Default)]
pub struct HeaderTracker {
    mode: HeaderMode,
    last_offset: usize,
}

impl HeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> HeaderMode {
        self.mode
    }

    /// Feed one scroll observation. Returns true if the mode changed.
    pub fn observe(&mut self, offset: usize) -> bool {
        let before = self.mode;

        if offset == 0 {
            self.mode = HeaderMode::Resting;
        } else if offset > self.last_offset && self.mode != HeaderMode::Scrolled {
            self.mode = HeaderMode::Scrolled;
        } else if offset < self.last_offset && self.mode == HeaderMode::Scrolled {
            self.mode = HeaderMode::ScrollUp;
        }

        // Updated unconditionally, even when no transition fires.
        self.last_offset = offset;
        self.mode != before
    }
}
