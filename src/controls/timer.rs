//! Deadline timers polled from the tick event.
//!
//! The event loop delivers a tick every 50 ms; anything scheduled for later
//! is expressed as a deadline checked against the tick's `Instant`. Both
//! timers replace any pending deadline when re-armed, so at most one deadline
//! is live per timer and a burst of re-arms collapses to the final one.

use std::time::{Duration, Instant};

/// One-shot timer. Re-arming replaces the pending deadline, which is the
/// whole debounce trick: only the last arm in a burst ever fires.
#[derive(Debug)]
pub struct Countdown {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Countdown {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule (or reschedule) the deadline at `now + delay`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline has passed; disarms on fire.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Recurring timer. `restart` replaces the pending deadline so the cadence
/// resumes a full period after the last restart.
#[derive(Debug)]
pub struct Cadence {
    period: Duration,
    next: Option<Instant>,
}

impl Cadence {
    /// Created stopped; call `restart` to begin.
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn restart(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// True when a period has elapsed; schedules the next firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_countdown_fires_once() {
        let t0 = Instant::now();
        let mut cd = Countdown::new(250 * MS);
        cd.arm(t0);
        assert!(!cd.fire(t0));
        assert!(!cd.fire(t0 + 249 * MS));
        assert!(cd.fire(t0 + 250 * MS));
        assert!(!cd.fire(t0 + 500 * MS));
        assert!(!cd.is_armed());
    }

    #[test]
    fn test_countdown_rearm_replaces_deadline() {
        let t0 = Instant::now();
        let mut cd = Countdown::new(250 * MS);
        cd.arm(t0);
        cd.arm(t0 + 100 * MS);
        // Original deadline has passed, but the re-arm moved it.
        assert!(!cd.fire(t0 + 300 * MS));
        assert!(cd.fire(t0 + 350 * MS));
    }

    #[test]
    fn test_countdown_cancel() {
        let t0 = Instant::now();
        let mut cd = Countdown::new(250 * MS);
        cd.arm(t0);
        cd.cancel();
        assert!(!cd.fire(t0 + 1000 * MS));
    }

    #[test]
    fn test_cadence_recurs() {
        let t0 = Instant::now();
        let mut c = Cadence::new(5000 * MS);
        assert!(!c.is_running());
        c.restart(t0);
        assert!(!c.fire(t0 + 4999 * MS));
        assert!(c.fire(t0 + 5000 * MS));
        // Next firing is a full period after the previous one.
        assert!(!c.fire(t0 + 9000 * MS));
        assert!(c.fire(t0 + 10000 * MS));
    }

    #[test]
    fn test_cadence_restart_defers_next_fire() {
        let t0 = Instant::now();
        let mut c = Cadence::new(5000 * MS);
        c.restart(t0);
        c.restart(t0 + 4000 * MS);
        assert!(!c.fire(t0 + 5000 * MS));
        assert!(c.fire(t0 + 9000 * MS));
    }
}
