//! Channel navigation for the monitor menu.
//!
//! The Next/Back buttons cycle through the channels in declaration order,
//! wrapping in both directions.
//!
//! # Channels
//!
//! - [`Channel::Gas`]: Ethylene concentration (ppm)
//! - [`Channel::Temperature`]: Storage temperature (°C)
//! - [`Channel::Humidity`]: Relative humidity (%)
//! - [`Channel::Co2`]: CO2 concentration (ppm)
//! - [`Channel::Summary`]: Running averages and elapsed time (no setpoints)

/// Available channels in the monitor menu.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// Ethylene gas, banded by a lower/upper pair.
    #[default]
    Gas = 0,

    /// Temperature, banded by a lower/upper pair.
    Temperature = 1,

    /// Humidity, banded by a single threshold.
    Humidity = 2,

    /// CO2, banded by a single threshold.
    Co2 = 3,

    /// Averages since boot. Reachable by navigation only.
    Summary = 4,
}

impl Channel {
    /// Number of entries in the menu (four measurements plus the summary).
    pub const COUNT: usize = 5;

    /// The four measured channels in ordinal order.
    pub const MEASURED: [Self; 4] = [Self::Gas, Self::Temperature, Self::Humidity, Self::Co2];

    /// Advance to the next channel (Gas -> Temperature -> ... -> Summary -> Gas).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Gas => Self::Temperature,
            Self::Temperature => Self::Humidity,
            Self::Humidity => Self::Co2,
            Self::Co2 => Self::Summary,
            Self::Summary => Self::Gas,
        }
    }

    /// Retreat to the previous channel (Gas -> Summary -> Co2 -> ...).
    #[inline]
    pub const fn prev(self) -> Self {
        match self {
            Self::Gas => Self::Summary,
            Self::Temperature => Self::Gas,
            Self::Humidity => Self::Temperature,
            Self::Co2 => Self::Humidity,
            Self::Summary => Self::Co2,
        }
    }

    /// Ordinal of the channel in menu order.
    #[inline]
    pub const fn ordinal(self) -> u8 { self as u8 }

    /// Channel for an ordinal. Out-of-range values map to `Gas`.
    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            1 => Self::Temperature,
            2 => Self::Humidity,
            3 => Self::Co2,
            4 => Self::Summary,
            _ => Self::Gas,
        }
    }

    /// Index into per-measurement arrays, `None` for the summary view.
    #[inline]
    pub const fn measurement_index(self) -> Option<usize> {
        match self {
            Self::Summary => None,
            _ => Some(self as usize),
        }
    }

    /// Whether the channel is configured by a lower/upper pair.
    #[inline]
    pub const fn has_band(self) -> bool { matches!(self, Self::Gas | Self::Temperature) }

    /// Screen title of the channel.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Gas => "GAS ETILENO",
            Self::Temperature => "TEMPERATURA",
            Self::Humidity => "UMIDADE",
            Self::Co2 => "CO2",
            Self::Summary => "MEDIAS",
        }
    }

    /// Engineering unit shown next to values of this channel.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Gas | Self::Co2 => "ppm",
            Self::Temperature => "°C",
            Self::Humidity => "%",
            Self::Summary => "",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
