//! Indicator colour and proportional drive levels.
//!
//! Gas and CO2 show a discrete traffic-light colour. Temperature and humidity
//! show a proportional drive level (simulated heater/cooler/humidifier speed)
//! on the PWM channels of the RGB LED:
//!
//! - Temperature below the band: heat = `(lower - v) / lower * 255` on red
//! - Temperature above the band: cool = `(v - upper) / 10 * 255` on blue
//! - Humidity below threshold: drive = `(threshold - v) / 50 * 255` on red
//!
//! Drive levels are clamped to `0..=255` and truncated. A zero divisor or a
//! non-finite ratio yields 0.

use crate::classify::Label;
use crate::config::{DRIVE_MAX, HUMIDITY_DRIVE_SPAN, TEMP_COOL_DRIVE_SPAN};
use crate::sampler::Measurements;
use crate::state::{Band, Channel, Setpoints};

// =============================================================================
// Colours
// =============================================================================

/// 8-bit RGB triple written to the indicator PWM channels.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const AMBER: Self = Self::new(255, 165, 0);
    pub const RED: Self = Self::new(255, 0, 0);

    pub const fn new(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self { r, g, b }
    }
}

/// Traffic-light colour of a gas or CO2 label.
pub const fn discrete_colour(label: Label) -> Rgb {
    match label {
        Label::Normal | Label::Ideal => Rgb::GREEN,
        Label::RapidRipening => Rgb::AMBER,
        _ => Rgb::RED,
    }
}

// =============================================================================
// Drive Levels
// =============================================================================

/// `error / span` scaled to `0..=DRIVE_MAX`, truncated.
///
/// Returns 0 when `span` is zero or the ratio is not finite. Negative errors
/// clamp to 0.
pub fn drive_level(
    error: f32,
    span: f32,
) -> u8 {
    if span == 0.0 {
        return 0;
    }
    let level = error / span * f32::from(DRIVE_MAX);
    if !level.is_finite() {
        return 0;
    }
    level.clamp(0.0, f32::from(DRIVE_MAX)) as u8
}

/// Mutually exclusive heating and cooling outputs.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct TemperatureDrive {
    pub heat: u8,
    pub cool: u8,
}

pub fn temperature_drive(
    value: f32,
    band: Band,
) -> TemperatureDrive {
    if value < band.lower {
        TemperatureDrive {
            heat: drive_level(band.lower - value, band.lower),
            cool: 0,
        }
    } else if value > band.upper {
        TemperatureDrive {
            heat: 0,
            cool: drive_level(value - band.upper, TEMP_COOL_DRIVE_SPAN),
        }
    } else {
        TemperatureDrive::default()
    }
}

pub fn humidity_drive(
    value: f32,
    threshold: f32,
) -> u8 {
    if value >= threshold {
        0
    } else {
        drive_level(threshold - value, HUMIDITY_DRIVE_SPAN)
    }
}

/// Indicator colour for the displayed channel, before blinking.
///
/// `label` must be the label of `channel`. Summary is dark.
pub fn indicator(
    channel: Channel,
    measurements: &Measurements,
    label: Option<Label>,
    setpoints: &Setpoints,
) -> Rgb {
    match (channel, label) {
        (Channel::Gas | Channel::Co2, Some(label)) => discrete_colour(label),
        (Channel::Temperature, _) => {
            let drive = temperature_drive(measurements.temperature, setpoints.temperature);
            Rgb::new(drive.heat, 0, drive.cool)
        }
        (Channel::Humidity, _) => Rgb::new(humidity_drive(measurements.humidity, setpoints.humidity), 0, 0),
        _ => Rgb::OFF,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BAND: Band = Band::new(10.0, 15.0);

    #[test]
    fn test_drive_zero_at_boundaries() {
        assert_eq!(temperature_drive(10.0, BAND), TemperatureDrive::default());
        assert_eq!(temperature_drive(15.0, BAND), TemperatureDrive::default());
        assert_eq!(temperature_drive(12.5, BAND), TemperatureDrive::default());
        assert_eq!(humidity_drive(90.0, 90.0), 0);
        assert_eq!(humidity_drive(95.0, 90.0), 0);
    }

    #[test]
    fn test_cool_drive_saturates() {
        assert_eq!(temperature_drive(20.0, BAND), TemperatureDrive { heat: 0, cool: 127 });
        assert_eq!(temperature_drive(25.0, BAND).cool, 255);
        assert_eq!(temperature_drive(40.0, BAND).cool, 255);
    }

    #[test]
    fn test_heat_drive() {
        assert_eq!(temperature_drive(5.0, BAND), TemperatureDrive { heat: 127, cool: 0 });
        assert_eq!(temperature_drive(0.0, BAND).heat, 255);
    }

    #[test]
    fn test_humidity_drive_saturates() {
        assert_eq!(humidity_drive(65.0, 90.0), 127);
        assert_eq!(humidity_drive(40.0, 90.0), 255);
        assert_eq!(humidity_drive(0.0, 90.0), 255);
    }

    #[test]
    fn test_outputs_mutually_exclusive() {
        for tenth in 0..400 {
            let drive = temperature_drive(tenth as f32 / 10.0, BAND);
            assert!(drive.heat == 0 || drive.cool == 0);
        }
    }

    #[test]
    fn test_zero_divisor_guard() {
        let band = Band::new(0.0, 15.0);
        assert_eq!(temperature_drive(-1.0, band).heat, 0);
        assert_eq!(drive_level(1.0, 0.0), 0);
        assert_eq!(drive_level(f32::NAN, 10.0), 0);
        assert_eq!(drive_level(f32::INFINITY, 10.0), 0);
    }

    #[test]
    fn test_negative_lower_never_drives() {
        let band = Band::new(-2.0, 15.0);
        assert_eq!(temperature_drive(-5.0, band).heat, 0);
    }

    #[test]
    fn test_indicator_per_channel() {
        let sp = Setpoints::DEFAULT;
        let m = Measurements::from_array([5.0, 20.0, 65.0, 900.0]);

        assert_eq!(indicator(Channel::Gas, &m, Some(Label::RapidRipening), &sp), Rgb::AMBER);
        assert_eq!(indicator(Channel::Co2, &m, Some(Label::High), &sp), Rgb::RED);
        assert_eq!(indicator(Channel::Co2, &m, Some(Label::Ideal), &sp), Rgb::GREEN);
        assert_eq!(indicator(Channel::Temperature, &m, Some(Label::SlightlyHigh), &sp), Rgb::new(0, 0, 127));
        assert_eq!(indicator(Channel::Humidity, &m, Some(Label::Low), &sp), Rgb::new(127, 0, 0));
        assert_eq!(indicator(Channel::Summary, &m, None, &sp), Rgb::OFF);
    }
}
