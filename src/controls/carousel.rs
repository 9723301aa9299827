//! Hero carousel: cycles slides on a 5 second cadence with manual override.
//!
//! Manual navigation (prev/next, indicator select) restarts the cadence so
//! automatic motion always resumes a full interval after the last manual
//! action. With fewer than two slides there is nothing to cycle: the cadence
//! is never started and every navigation method is inert.

use crate::controls::timer::Cadence;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Carousel {
    count: usize,
    indicators: bool,
    current: usize,
    cadence: Cadence,
}

impl Carousel {
    pub fn new(count: usize, indicators: bool, interval: Duration, now: Instant) -> Self {
        let mut cadence = Cadence::new(interval);
        if count >= 2 {
            cadence.restart(now);
        }
        Self {
            count,
            indicators,
            current: 0,
            cadence,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the single active slide, if any slides exist.
    pub fn active_slide(&self) -> Option<usize> {
        (self.count > 0).then_some(self.current)
    }

    /// Index of the single active indicator dot, if indicators exist.
    pub fn active_indicator(&self) -> Option<usize> {
        (self.indicators && self.count > 0).then_some(self.current)
    }

    pub fn has_indicators(&self) -> bool {
        self.indicators && self.count > 0
    }

    pub fn is_cycling(&self) -> bool {
        self.cadence.is_running()
    }

    /// Activate slide `index`. Out-of-range indices and the empty slide set
    /// are no-ops.
    pub fn show_slide(&mut self, index: usize) {
        if index < self.count {
            self.current = index;
        }
    }

    pub fn advance(&mut self) {
        if self.count > 0 {
            self.show_slide((self.current + 1) % self.count);
        }
    }

    pub fn retreat(&mut self) {
        if self.count > 0 {
            self.show_slide((self.current + self.count - 1) % self.count);
        }
    }

    /// Manual next. Inert below two slides; otherwise restarts the cadence.
    pub fn next(&mut self, now: Instant) {
        if self.count >= 2 {
            self.advance();
            self.cadence.restart(now);
        }
    }

    /// Manual previous. Inert below two slides; otherwise restarts the cadence.
    pub fn prev(&mut self, now: Instant) {
        if self.count >= 2 {
            self.retreat();
            self.cadence.restart(now);
        }
    }

    /// Manual indicator select. Inert below two slides.
    pub fn select(&mut self, index: usize, now: Instant) {
        if self.count >= 2 {
            self.show_slide(index);
            self.cadence.restart(now);
        }
    }

    /// Advance automatically when the cadence fires. Returns true if the
    /// active slide changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.cadence.fire(now) {
            self.advance();
            true
        } else {
            false
        }
    }
}
