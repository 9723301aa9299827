//! Page scroll position, with animated travel to anchor targets.
//!
//! The scroller owns the vertical offset into the rendered page. Anchor
//! navigation sets a travel target; each tick steps the offset toward it with
//! a shrinking stride so the motion eases out. Manual scrolling cancels any
//! travel in flight.

#[derive(Debug, Default)]
pub struct Scroller {
    offset: usize,
    target: Option<usize>,
    max_offset: usize,
}

impl Scroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_travelling(&self) -> bool {
        self.target.is_some()
    }

    /// Update the scrollable range; clamps the current offset and target.
    pub fn set_bounds(&mut self, max_offset: usize) {
        self.max_offset = max_offset;
        self.offset = self.offset.min(max_offset);
        if let Some(t) = self.target {
            self.target = Some(t.min(max_offset));
        }
    }

    /// Begin animated travel toward `target`.
    pub fn travel_to(&mut self, target: usize) {
        let target = target.min(self.max_offset);
        if target != self.offset {
            self.target = Some(target);
        }
    }

    /// Manual scroll by a signed number of lines. Cancels travel.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.target = None;
        let before = self.offset;
        self.offset = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize).min(self.max_offset)
        };
        self.offset != before
    }

    /// Jump without animation. Cancels travel.
    pub fn jump_to(&mut self, offset: usize) -> bool {
        self.target = None;
        let before = self.offset;
        self.offset = offset.min(self.max_offset);
        self.offset != before
    }

    /// Step an in-flight travel. Returns true if the offset moved.
    pub fn on_tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        let stride = (distance / 4).max(1);
        if target > self.offset {
            self.offset += stride;
        } else {
            self.offset -= stride;
        }
        if self.offset == target {
            self.target = None;
        }
        true
    }
}
