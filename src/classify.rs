//! Per-channel status classification.
//!
//! | Channel     | Bands (low -> high)                                               |
//! |-------------|-------------------------------------------------------------------|
//! | Gas         | `< lower` Normal, `< upper` RapidRipening, else Rotting           |
//! | Temperature | `< lower` Cold, `<= upper` Ideal, `<= upper + 5` SlightlyHigh, else Critical |
//! | Humidity    | `>= threshold` Ideal, else Low                                    |
//! | CO2         | `<= threshold` Ideal, else High                                   |
//!
//! Boundary values fall in the less severe band. With an inverted band
//! (`lower > upper`) the rules are tried Ideal first and Critical last, so some
//! labels become unreachable but every value still gets exactly one label.

use crate::config::TEMP_SLIGHTLY_HIGH_MARGIN;
use crate::sampler::Measurements;
use crate::state::{Band, Channel, Setpoints};

/// Status label of a measurement.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Label {
    // Gas
    Normal,
    RapidRipening,
    Rotting,
    // Temperature, humidity and CO2
    Ideal,
    SlightlyHigh,
    Cold,
    Critical,
    Low,
    High,
}

impl Label {
    /// Text shown after `Status: ` on the display.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::RapidRipening => "Amadurec. rapido",
            Self::Rotting => "Apodrecendo",
            Self::Ideal => "Ideal",
            Self::SlightlyHigh => "Levemente alto",
            Self::Cold => "Frio",
            Self::Critical => "Critico",
            Self::Low => "Baixa",
            Self::High => "Alto",
        }
    }

    /// Whether this is the best band of its channel.
    #[inline]
    pub const fn is_ideal(self) -> bool { matches!(self, Self::Normal | Self::Ideal) }
}

pub fn classify_gas(
    value: f32,
    band: Band,
) -> Label {
    if value < band.lower {
        Label::Normal
    } else if value < band.upper {
        Label::RapidRipening
    } else {
        Label::Rotting
    }
}

pub fn classify_temperature(
    value: f32,
    band: Band,
) -> Label {
    if value >= band.lower && value <= band.upper {
        Label::Ideal
    } else if value > band.upper && value <= band.upper + TEMP_SLIGHTLY_HIGH_MARGIN {
        Label::SlightlyHigh
    } else if value < band.lower {
        Label::Cold
    } else {
        Label::Critical
    }
}

pub fn classify_humidity(
    value: f32,
    threshold: f32,
) -> Label {
    if value >= threshold { Label::Ideal } else { Label::Low }
}

pub fn classify_co2(
    value: f32,
    threshold: f32,
) -> Label {
    if value <= threshold { Label::Ideal } else { Label::High }
}

/// Classify `value` on `channel`. Returns `None` for the summary.
pub fn classify(
    channel: Channel,
    value: f32,
    setpoints: &Setpoints,
) -> Option<Label> {
    match channel {
        Channel::Gas => Some(classify_gas(value, setpoints.gas)),
        Channel::Temperature => Some(classify_temperature(value, setpoints.temperature)),
        Channel::Humidity => Some(classify_humidity(value, setpoints.humidity)),
        Channel::Co2 => Some(classify_co2(value, setpoints.co2)),
        Channel::Summary => None,
    }
}

/// Labels of all four measurements, in channel order.
pub fn classify_all(
    measurements: &Measurements,
    setpoints: &Setpoints,
) -> [Label; 4] {
    [
        classify_gas(measurements.gas, setpoints.gas),
        classify_temperature(measurements.temperature, setpoints.temperature),
        classify_humidity(measurements.humidity, setpoints.humidity),
        classify_co2(measurements.co2, setpoints.co2),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SP: Setpoints = Setpoints::DEFAULT;

    #[test]
    fn test_gas_bands() {
        assert_eq!(classify_gas(2.99, SP.gas), Label::Normal);
        assert_eq!(classify_gas(3.0, SP.gas), Label::RapidRipening);
        assert_eq!(classify_gas(6.99, SP.gas), Label::RapidRipening);
        assert_eq!(classify_gas(7.0, SP.gas), Label::Rotting);
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(classify_temperature(9.9, SP.temperature), Label::Cold);
        assert_eq!(classify_temperature(10.0, SP.temperature), Label::Ideal);
        assert_eq!(classify_temperature(15.0, SP.temperature), Label::Ideal);
        assert_eq!(classify_temperature(15.1, SP.temperature), Label::SlightlyHigh);
        assert_eq!(classify_temperature(20.0, SP.temperature), Label::SlightlyHigh);
        assert_eq!(classify_temperature(20.1, SP.temperature), Label::Critical);
    }

    #[test]
    fn test_humidity_and_co2_bands() {
        assert_eq!(classify_humidity(90.0, 90.0), Label::Ideal);
        assert_eq!(classify_humidity(89.9, 90.0), Label::Low);
        assert_eq!(classify_co2(800.0, 800.0), Label::Ideal);
        assert_eq!(classify_co2(800.1, 800.0), Label::High);
    }

    #[test]
    fn test_partition_has_no_gaps() {
        // Sweep a fine grid; every value gets a label consistent with its neighbours
        let mut value = -5.0_f32;
        let mut previous = classify_temperature(value, SP.temperature);
        while value < 30.0 {
            value += 0.05;
            let label = classify_temperature(value, SP.temperature);
            let allowed = match previous {
                Label::Cold => matches!(label, Label::Cold | Label::Ideal),
                Label::Ideal => matches!(label, Label::Ideal | Label::SlightlyHigh),
                Label::SlightlyHigh => matches!(label, Label::SlightlyHigh | Label::Critical),
                Label::Critical => label == Label::Critical,
                _ => false,
            };
            assert!(allowed, "{previous:?} -> {label:?} at {value}");
            previous = label;
        }
        assert_eq!(previous, Label::Critical);
    }

    #[test]
    fn test_inverted_band_empties_ideal() {
        let band = Band::new(15.0, 10.0);
        for tenth in 0..300 {
            let value = tenth as f32 / 10.0;
            assert_ne!(classify_temperature(value, band), Label::Ideal);
        }
        assert_eq!(classify_temperature(5.0, band), Label::Cold);
        assert_eq!(classify_temperature(12.0, band), Label::SlightlyHigh);
    }

    #[test]
    fn test_classify_dispatch() {
        assert_eq!(classify(Channel::Co2, 900.0, &SP), Some(Label::High));
        assert_eq!(classify(Channel::Summary, 900.0, &SP), None);

        let labels = classify_all(&Measurements::from_array([5.0, 12.0, 50.0, 500.0]), &SP);
        assert_eq!(labels, [Label::RapidRipening, Label::Ideal, Label::Low, Label::Ideal]);
    }

    #[test]
    fn test_label_text_and_ideal() {
        assert_eq!(Label::RapidRipening.text(), "Amadurec. rapido");
        assert_eq!(Label::Low.text(), "Baixa");
        assert!(Label::Normal.is_ideal());
        assert!(Label::Ideal.is_ideal());
        assert!(!Label::RapidRipening.is_ideal());
        assert!(!Label::High.is_ideal());
    }
}
