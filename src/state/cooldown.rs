//! Global input cooldown for the three menu buttons.
//!
//! A single timestamp is shared by Next, Back and Set: after any accepted
//! edge, every edge on any button is dropped until the window has elapsed.
//! Edges inside the window are not queued.

use crate::config::DEBOUNCE_WINDOW_MS;

/// One debounce gate for all buttons, keyed on the time of the last accepted edge.
#[derive(Clone, Copy, Debug)]
pub struct GlobalInputCooldown {
    window_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl GlobalInputCooldown {
    /// Create a gate with the given window. The first edge is always accepted.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Returns true and records `now_ms` if the window has elapsed since the
    /// last accepted edge.
    ///
    /// A clock that appears to run backwards (`now_ms` earlier than the last
    /// accepted edge) is treated as "inside the window".
    pub fn accept(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if let Some(last) = self.last_accepted_ms
            && now_ms.saturating_sub(last) < self.window_ms
        {
            return false;
        }

        self.last_accepted_ms = Some(now_ms);
        true
    }

    /// Time of the last accepted edge, if any.
    #[inline]
    pub const fn last_accepted_ms(&self) -> Option<u64> { self.last_accepted_ms }
}

impl Default for GlobalInputCooldown {
    fn default() -> Self { Self::new(DEBOUNCE_WINDOW_MS) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_edge_accepted() {
        let mut gate = GlobalInputCooldown::default();
        assert!(gate.accept(0));
        assert_eq!(gate.last_accepted_ms(), Some(0));
    }

    #[test]
    fn test_edges_50ms_apart() {
        let mut gate = GlobalInputCooldown::new(200);
        assert!(gate.accept(1_000));
        assert!(!gate.accept(1_050));
        // Rejected edge does not move the gate
        assert_eq!(gate.last_accepted_ms(), Some(1_000));
    }

    #[test]
    fn test_edges_250ms_apart() {
        let mut gate = GlobalInputCooldown::new(200);
        assert!(gate.accept(1_000));
        assert!(gate.accept(1_250));
    }

    #[test]
    fn test_window_boundary_inclusive() {
        let mut gate = GlobalInputCooldown::new(200);
        assert!(gate.accept(500));
        assert!(!gate.accept(699));
        assert!(gate.accept(700));
    }

    #[test]
    fn test_burst_measured_from_last_accepted() {
        let mut gate = GlobalInputCooldown::new(200);
        assert!(gate.accept(0));
        // Bounces every 50ms never extend the window
        assert!(!gate.accept(50));
        assert!(!gate.accept(100));
        assert!(!gate.accept(150));
        assert!(gate.accept(200));
    }

    #[test]
    fn test_backwards_clock_rejected() {
        let mut gate = GlobalInputCooldown::new(200);
        assert!(gate.accept(1_000));
        assert!(!gate.accept(900));
    }
}
