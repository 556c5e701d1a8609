//! Raw ADC samples to engineering units.
//!
//! Two potentiometers stand in for four sensors. The gas line backs both the
//! ethylene and the CO2 reading (same raw sample, different scale); the
//! climate line backs both temperature and humidity.
//!
//! Every mapping is linear: `value = raw / RAW_MAX * FULL_SCALE`.

use crate::config::{CO2_FULL_SCALE, GAS_FULL_SCALE, HUMIDITY_FULL_SCALE, RAW_MAX, TEMP_FULL_SCALE};
use crate::state::Channel;

/// One reading of both potentiometer lines (0..=4095).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct RawSample {
    /// GPIO27 / ADC1. Gas and CO2.
    pub gas: u16,
    /// GPIO26 / ADC0. Temperature and humidity.
    pub climate: u16,
}

impl RawSample {
    pub const fn new(
        gas: u16,
        climate: u16,
    ) -> Self {
        Self { gas, climate }
    }
}

/// A single value with its channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Measurement {
    pub channel: Channel,
    pub value: f32,
}

impl Measurement {
    #[inline]
    pub const fn unit(&self) -> &'static str { self.channel.unit() }
}

/// The four measurements of one loop iteration.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Measurements {
    pub gas: f32,
    pub temperature: f32,
    pub humidity: f32,
    pub co2: f32,
}

impl Measurements {
    /// Value of `channel`, `None` for the summary.
    pub const fn get(
        &self,
        channel: Channel,
    ) -> Option<f32> {
        match channel {
            Channel::Gas => Some(self.gas),
            Channel::Temperature => Some(self.temperature),
            Channel::Humidity => Some(self.humidity),
            Channel::Co2 => Some(self.co2),
            Channel::Summary => None,
        }
    }

    /// Values in channel order.
    pub const fn to_array(&self) -> [f32; 4] { [self.gas, self.temperature, self.humidity, self.co2] }

    pub const fn from_array(values: [f32; 4]) -> Self {
        Self {
            gas: values[0],
            temperature: values[1],
            humidity: values[2],
            co2: values[3],
        }
    }

    /// Values paired with their channels.
    pub fn iter(&self) -> impl Iterator<Item = Measurement> + '_ {
        Channel::MEASURED.into_iter().zip(self.to_array()).map(|(channel, value)| Measurement { channel, value })
    }
}

/// Scale a raw sample to `0.0..=full_scale`. Samples above `RAW_MAX` saturate.
#[inline]
pub fn scale(
    raw: u16,
    full_scale: f32,
) -> f32 {
    f32::from(raw.min(RAW_MAX)) / f32::from(RAW_MAX) * full_scale
}

/// Convert one raw sample into the four measurements.
pub fn sample(raw: RawSample) -> Measurements {
    Measurements {
        gas: scale(raw.gas, GAS_FULL_SCALE),
        temperature: scale(raw.climate, TEMP_FULL_SCALE),
        humidity: scale(raw.climate, HUMIDITY_FULL_SCALE),
        co2: scale(raw.gas, CO2_FULL_SCALE),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
