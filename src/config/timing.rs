//! Timing configuration constants.
//!
//! All durations are plain milliseconds so the library stays independent of
//! any platform clock. The firmware converts `embassy_time::Instant` to
//! milliseconds since boot before handing time to the library.

// =============================================================================
// Input
// =============================================================================

/// Minimum time between two accepted button edges, shared by all buttons.
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

// =============================================================================
// Control Loop
// =============================================================================

/// Pause at the end of each loop iteration so lower-priority tasks get polled.
pub const LOOP_YIELD_MS: u64 = 10;

// =============================================================================
// Indicator
// =============================================================================

/// Half-period of the indicator blink on discrete-colour channels (Gas, CO2).
pub const BLINK_INTERVAL_MS: u64 = 100;

// =============================================================================
// Boot
// =============================================================================

/// Number of splash frames shown at boot (rectangle drawn on even frames).
pub const SPLASH_FRAMES: u8 = 8;

/// Duration of a single splash frame.
pub const SPLASH_FRAME_MS: u64 = 500;

/// Silence between notes of the startup melody.
pub const MELODY_GAP_MS: u64 = 50;

// =============================================================================
// Logging
// =============================================================================

/// Interval between periodic status lines on the log output.
pub const STATUS_LOG_INTERVAL_MS: u64 = 2000;

// Input must settle well within the status cadence.
const _: () = assert!(DEBOUNCE_WINDOW_MS < STATUS_LOG_INTERVAL_MS);
const _: () = assert!(BLINK_INTERVAL_MS > 0);
// The blink phase must be sampled at least twice per interval.
const _: () = assert!(LOOP_YIELD_MS * 2 <= BLINK_INTERVAL_MS);
