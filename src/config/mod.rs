//! Application configuration.
//!
//! - `timing`: Debounce window, loop pacing, blink interval, splash and logging cadence
//! - `sensors`: ADC scaling, default setpoints, edit steps and drive spans

pub mod sensors;
pub mod timing;

// Re-export timing constants at config level for convenience
pub use timing::{
    BLINK_INTERVAL_MS,
    DEBOUNCE_WINDOW_MS,
    LOOP_YIELD_MS,
    MELODY_GAP_MS,
    SPLASH_FRAME_MS,
    SPLASH_FRAMES,
    STATUS_LOG_INTERVAL_MS,
};
// Re-export sensor constants at config level for convenience
pub use sensors::{
    CO2_DEFAULT,
    CO2_FULL_SCALE,
    CO2_STEP,
    DRIVE_MAX,
    GAS_DEFAULT_LOWER,
    GAS_DEFAULT_UPPER,
    GAS_FULL_SCALE,
    GAS_STEP,
    HUMIDITY_DEFAULT,
    HUMIDITY_DRIVE_SPAN,
    HUMIDITY_FULL_SCALE,
    HUMIDITY_STEP,
    RAW_MAX,
    TEMP_COOL_DRIVE_SPAN,
    TEMP_DEFAULT_LOWER,
    TEMP_DEFAULT_UPPER,
    TEMP_FULL_SCALE,
    TEMP_SLIGHTLY_HIGH_MARGIN,
    TEMP_STEP,
};
