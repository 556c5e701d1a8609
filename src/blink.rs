//! Blink phase of the discrete-colour indicator.
//!
//! The schedule is a pure comparison against a millisecond clock; it never
//! sleeps. Each due poll flips the phase once. A poll less than one interval
//! late keeps the cadence (deadline moves by exactly one interval); a poll
//! later than that restarts the cadence from `now_ms`, since the indicator is
//! only polled while a blinking channel is displayed.

use crate::config::BLINK_INTERVAL_MS;

#[derive(Clone, Copy, Debug)]
pub struct BlinkSchedule {
    interval_ms: u64,
    due_at_ms: u64,
    on: bool,
}

impl BlinkSchedule {
    /// Start dark, first toggle one interval after `now_ms`.
    pub const fn new(
        interval_ms: u64,
        now_ms: u64,
    ) -> Self {
        Self {
            interval_ms,
            due_at_ms: now_ms.saturating_add(interval_ms),
            on: false,
        }
    }

    /// Whether the interval has elapsed at `now_ms`.
    #[inline]
    pub const fn is_due(
        &self,
        now_ms: u64,
    ) -> bool {
        now_ms >= self.due_at_ms
    }

    /// Toggle if due and return the current phase.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if !self.is_due(now_ms) {
            return self.on;
        }

        self.on = !self.on;
        let next = self.due_at_ms.saturating_add(self.interval_ms);
        self.due_at_ms = if now_ms >= next { now_ms.saturating_add(self.interval_ms) } else { next };
        self.on
    }

    #[inline]
    pub const fn is_on(&self) -> bool { self.on }
}

impl Default for BlinkSchedule {
    fn default() -> Self { Self::new(BLINK_INTERVAL_MS, 0) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_every_interval() {
        let mut blink = BlinkSchedule::new(100, 0);
        assert!(!blink.poll(0));
        assert!(!blink.poll(99));
        assert!(blink.poll(100));
        assert!(blink.poll(150));
        assert!(!blink.poll(200));
        assert!(blink.poll(300));
    }

    #[test]
    fn test_is_due_is_pure() {
        let blink = BlinkSchedule::new(100, 1_000);
        assert!(!blink.is_due(1_099));
        assert!(blink.is_due(1_100));
        assert!(blink.is_due(1_100));
        assert!(!blink.is_on());
    }

    #[test]
    fn test_slightly_late_poll_keeps_cadence() {
        let mut blink = BlinkSchedule::new(100, 0);
        assert!(blink.poll(130));
        assert!(!blink.is_due(199));
        assert!(!blink.poll(200));
    }

    #[test]
    fn test_long_gap_restarts_cadence() {
        let mut blink = BlinkSchedule::new(100, 0);
        // Not polled for a minute
        assert!(blink.poll(60_000));
        assert!(blink.poll(60_000));
        assert!(blink.poll(60_099));
        assert!(!blink.poll(60_100));
        assert!(!blink.poll(60_199));
        assert!(blink.poll(60_200));
    }
}
