//! Sensor scaling and setpoint configuration.
//!
//! All values are compile-time constants with validation assertions, so the
//! defaults can never ship with an inverted band.
//!
//! # Compile-Time Validation
//!
//! Each group includes `const` assertions that verify ordering at compile
//! time. If a default is configured incorrectly (e.g., `LOWER > UPPER`),
//! compilation fails.

// =============================================================================
// ADC Scaling
// =============================================================================

/// Largest raw sample of the 12-bit ADC.
pub const RAW_MAX: u16 = 4095;

/// Ethylene gas full scale in ppm (raw = `RAW_MAX`).
pub const GAS_FULL_SCALE: f32 = 10.0;

/// Temperature full scale in degrees Celsius.
pub const TEMP_FULL_SCALE: f32 = 40.0;

/// Relative humidity full scale in percent.
pub const HUMIDITY_FULL_SCALE: f32 = 100.0;

/// CO2 full scale in ppm. Shares the raw line of the gas sensor.
pub const CO2_FULL_SCALE: f32 = 1000.0;

// =============================================================================
// Gas (Ethylene) Setpoints
// =============================================================================

/// Below this value ripening is normal.
pub const GAS_DEFAULT_LOWER: f32 = 3.0;

/// At or above this value the fruit is rotting.
pub const GAS_DEFAULT_UPPER: f32 = 7.0;

/// Edit step for both gas setpoints.
pub const GAS_STEP: f32 = 0.1;

const _: () = assert!(GAS_DEFAULT_LOWER < GAS_DEFAULT_UPPER);

// =============================================================================
// Temperature Setpoints
// =============================================================================

/// Lower bound of the ideal storage band.
pub const TEMP_DEFAULT_LOWER: f32 = 10.0;

/// Upper bound of the ideal storage band.
pub const TEMP_DEFAULT_UPPER: f32 = 15.0;

/// Edit step for both temperature setpoints.
pub const TEMP_STEP: f32 = 0.5;

/// Width of the "slightly high" band above the upper setpoint.
pub const TEMP_SLIGHTLY_HIGH_MARGIN: f32 = 5.0;

/// Error above the upper setpoint at which the cooling drive saturates.
pub const TEMP_COOL_DRIVE_SPAN: f32 = 10.0;

const _: () = assert!(TEMP_DEFAULT_LOWER < TEMP_DEFAULT_UPPER);
const _: () = assert!(TEMP_DEFAULT_LOWER > 0.0); // heating drive divides by the lower setpoint

// =============================================================================
// Humidity Setpoint
// =============================================================================

/// Minimum humidity considered ideal.
pub const HUMIDITY_DEFAULT: f32 = 90.0;

/// Edit step for the humidity threshold.
pub const HUMIDITY_STEP: f32 = 1.0;

/// Deficit below the threshold at which the humidifier drive saturates.
pub const HUMIDITY_DRIVE_SPAN: f32 = 50.0;

const _: () = assert!(HUMIDITY_DEFAULT <= HUMIDITY_FULL_SCALE);

// =============================================================================
// CO2 Setpoint
// =============================================================================

/// Maximum CO2 considered ideal.
pub const CO2_DEFAULT: f32 = 800.0;

/// Edit step for the CO2 threshold.
pub const CO2_STEP: f32 = 50.0;

const _: () = assert!(CO2_DEFAULT <= CO2_FULL_SCALE);

// =============================================================================
// Actuators
// =============================================================================

/// PWM wrap of the RGB indicator and the full-scale drive level.
pub const DRIVE_MAX: u8 = 255;

// =============================================================================
// Unit Tests
// =============================================================================
