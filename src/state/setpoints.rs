//! Setpoint records and the store mutated by the menu.
//!
//! Gas and temperature are banded by a `(lower, upper)` pair; humidity and
//! CO2 by a single threshold. Edits move a value by a fixed per-channel step.
//!
//! # Validation Policy
//!
//! By default edits are applied literally: nothing stops a band from being
//! inverted (`lower > upper`) or the lower temperature setpoint from reaching
//! zero, which is the divisor of the heating drive. With
//! [`SetpointPolicy::Validated`] such edits are rejected and the previous value
//! is kept. [`SetpointStore::check`] reports violations under either policy.

use core::fmt;

use super::Channel;
use crate::config::{
    CO2_DEFAULT,
    CO2_STEP,
    GAS_DEFAULT_LOWER,
    GAS_DEFAULT_UPPER,
    GAS_STEP,
    HUMIDITY_DEFAULT,
    HUMIDITY_STEP,
    TEMP_DEFAULT_LOWER,
    TEMP_DEFAULT_UPPER,
    TEMP_STEP,
};

// =============================================================================
// Setpoint Records
// =============================================================================

/// Lower/upper setpoint pair.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Band {
    pub lower: f32,
    pub upper: f32,
}

impl Band {
    pub const fn new(
        lower: f32,
        upper: f32,
    ) -> Self {
        Self { lower, upper }
    }

    /// Whether `lower <= upper`. An inverted band leaves some labels unreachable.
    #[inline]
    pub fn is_ordered(&self) -> bool { self.lower <= self.upper }
}

/// Setpoints of all four measured channels.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Setpoints {
    pub gas: Band,
    pub temperature: Band,
    pub humidity: f32,
    pub co2: f32,
}

impl Setpoints {
    /// Factory defaults from [`crate::config::sensors`].
    pub const DEFAULT: Self = Self {
        gas: Band::new(GAS_DEFAULT_LOWER, GAS_DEFAULT_UPPER),
        temperature: Band::new(TEMP_DEFAULT_LOWER, TEMP_DEFAULT_UPPER),
        humidity: HUMIDITY_DEFAULT,
        co2: CO2_DEFAULT,
    };

    /// Value addressed by `channel`/`parameter`.
    ///
    /// Single-threshold channels ignore `parameter`. Returns `None` for the summary.
    pub const fn get(
        &self,
        channel: Channel,
        parameter: Parameter,
    ) -> Option<f32> {
        match (channel, parameter) {
            (Channel::Gas, Parameter::Lower) => Some(self.gas.lower),
            (Channel::Gas, Parameter::Upper) => Some(self.gas.upper),
            (Channel::Temperature, Parameter::Lower) => Some(self.temperature.lower),
            (Channel::Temperature, Parameter::Upper) => Some(self.temperature.upper),
            (Channel::Humidity, _) => Some(self.humidity),
            (Channel::Co2, _) => Some(self.co2),
            (Channel::Summary, _) => None,
        }
    }

    fn slot_mut(
        &mut self,
        channel: Channel,
        parameter: Parameter,
    ) -> Option<&mut f32> {
        match (channel, parameter) {
            (Channel::Gas, Parameter::Lower) => Some(&mut self.gas.lower),
            (Channel::Gas, Parameter::Upper) => Some(&mut self.gas.upper),
            (Channel::Temperature, Parameter::Lower) => Some(&mut self.temperature.lower),
            (Channel::Temperature, Parameter::Upper) => Some(&mut self.temperature.upper),
            (Channel::Humidity, _) => Some(&mut self.humidity),
            (Channel::Co2, _) => Some(&mut self.co2),
            (Channel::Summary, _) => None,
        }
    }

    /// First violated invariant, if any.
    pub fn check(&self) -> Result<(), SetpointError> {
        if !self.gas.is_ordered() {
            return Err(SetpointError::InvertedBand(Channel::Gas));
        }
        if !self.temperature.is_ordered() {
            return Err(SetpointError::InvertedBand(Channel::Temperature));
        }
        if self.temperature.lower <= 0.0 {
            return Err(SetpointError::ZeroDivisor(Channel::Temperature));
        }
        Ok(())
    }
}

impl Default for Setpoints {
    fn default() -> Self { Self::DEFAULT }
}

/// Which half of a band is being edited.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum Parameter {
    #[default]
    Lower = 0,
    Upper = 1,
}

impl Parameter {
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        if bits == 0 { Self::Lower } else { Self::Upper }
    }
}

/// Direction of a setpoint edit (Next = up, Back = down).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
}

/// Edit step of a channel, `0.0` for the summary.
pub const fn edit_step(channel: Channel) -> f32 {
    match channel {
        Channel::Gas => GAS_STEP,
        Channel::Temperature => TEMP_STEP,
        Channel::Humidity => HUMIDITY_STEP,
        Channel::Co2 => CO2_STEP,
        Channel::Summary => 0.0,
    }
}

// =============================================================================
// Errors and Policy
// =============================================================================

/// Setpoint invariant violations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SetpointError {
    /// The channel's lower setpoint is above its upper setpoint.
    InvertedBand(Channel),
    /// The channel's setpoint used as a divisor is zero or negative.
    ZeroDivisor(Channel),
}

impl fmt::Display for SetpointError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InvertedBand(channel) => write!(f, "{}: lower above upper", channel.title()),
            Self::ZeroDivisor(channel) => write!(f, "{}: divisor not positive", channel.title()),
        }
    }
}

/// How edits that break an invariant are handled.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SetpointPolicy {
    /// Apply every edit as-is.
    #[default]
    Literal,
    /// Reject edits that would violate [`Setpoints::check`].
    Validated,
}

// =============================================================================
// Setpoint Store
// =============================================================================

/// Mutable setpoints owned by the menu state machine.
#[derive(Clone, Copy, Debug)]
pub struct SetpointStore {
    setpoints: Setpoints,
    policy: SetpointPolicy,
}

impl SetpointStore {
    pub const fn new(
        setpoints: Setpoints,
        policy: SetpointPolicy,
    ) -> Self {
        Self { setpoints, policy }
    }

    #[inline]
    pub const fn setpoints(&self) -> Setpoints { self.setpoints }

    #[inline]
    pub const fn policy(&self) -> SetpointPolicy { self.policy }

    /// Move the addressed setpoint one step in `direction`.
    ///
    /// Returns the new value, `Ok(None)` when the channel has no setpoint
    /// (summary), or the violated invariant when the validated policy rejects
    /// the edit. A rejected edit leaves the store unchanged.
    pub fn nudge(
        &mut self,
        channel: Channel,
        parameter: Parameter,
        direction: Direction,
    ) -> Result<Option<f32>, SetpointError> {
        let step = match direction {
            Direction::Up => edit_step(channel),
            Direction::Down => -edit_step(channel),
        };

        let mut candidate = self.setpoints;
        let Some(slot) = candidate.slot_mut(channel, parameter) else {
            return Ok(None);
        };
        *slot += step;
        let value = *slot;

        if self.policy == SetpointPolicy::Validated {
            candidate.check()?;
        }

        self.setpoints = candidate;
        Ok(Some(value))
    }

    /// First violated invariant of the current setpoints, whatever the policy.
    #[inline]
    pub fn check(&self) -> Result<(), SetpointError> { self.setpoints.check() }
}

impl Default for SetpointStore {
    fn default() -> Self { Self::new(Setpoints::DEFAULT, SetpointPolicy::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert_eq!(Setpoints::DEFAULT.check(), Ok(()));
        assert_eq!(Setpoints::default().humidity, 90.0);
        assert_eq!(Setpoints::default().co2, 800.0);
    }

    #[test]
    fn test_get_single_threshold_ignores_parameter() {
        let sp = Setpoints::DEFAULT;
        assert_eq!(sp.get(Channel::Humidity, Parameter::Lower), Some(90.0));
        assert_eq!(sp.get(Channel::Humidity, Parameter::Upper), Some(90.0));
        assert_eq!(sp.get(Channel::Summary, Parameter::Lower), None);
    }

    #[test]
    fn test_nudge_steps() {
        let mut store = SetpointStore::default();
        assert_eq!(store.nudge(Channel::Temperature, Parameter::Upper, Direction::Up), Ok(Some(15.5)));
        assert_eq!(store.nudge(Channel::Humidity, Parameter::Lower, Direction::Down), Ok(Some(89.0)));
        assert_eq!(store.nudge(Channel::Co2, Parameter::Lower, Direction::Up), Ok(Some(850.0)));

        let gas = store.nudge(Channel::Gas, Parameter::Lower, Direction::Up).unwrap().unwrap();
        assert!((gas - 3.1).abs() < 1e-6);
        assert_eq!(store.setpoints().gas.upper, 7.0);
    }

    #[test]
    fn test_nudge_summary_is_noop() {
        let mut store = SetpointStore::default();
        assert_eq!(store.nudge(Channel::Summary, Parameter::Lower, Direction::Up), Ok(None));
        assert_eq!(store.setpoints(), Setpoints::DEFAULT);
    }

    #[test]
    fn test_literal_policy_allows_inverted_band() {
        let mut store = SetpointStore::default();
        // 15.0 -> 9.5 in 0.5 steps crosses the lower setpoint of 10.0
        for _ in 0..11 {
            assert!(store.nudge(Channel::Temperature, Parameter::Upper, Direction::Down).is_ok());
        }
        assert_eq!(store.setpoints().temperature.upper, 9.5);
        assert_eq!(store.check(), Err(SetpointError::InvertedBand(Channel::Temperature)));
    }

    #[test]
    fn test_literal_policy_allows_zero_divisor() {
        let mut store = SetpointStore::default();
        for _ in 0..20 {
            store.nudge(Channel::Temperature, Parameter::Lower, Direction::Down).unwrap();
        }
        assert_eq!(store.setpoints().temperature.lower, 0.0);
        assert_eq!(store.check(), Err(SetpointError::ZeroDivisor(Channel::Temperature)));
    }

    #[test]
    fn test_validated_policy_rejects_inversion() {
        let mut store = SetpointStore::new(
            Setpoints {
                gas: Band::new(5.0, 5.0),
                ..Setpoints::DEFAULT
            },
            SetpointPolicy::Validated,
        );
        let result = store.nudge(Channel::Gas, Parameter::Lower, Direction::Up);
        assert_eq!(result, Err(SetpointError::InvertedBand(Channel::Gas)));
        assert_eq!(store.setpoints().gas.lower, 5.0);
    }

    #[test]
    fn test_validated_policy_rejects_zero_divisor() {
        let mut store = SetpointStore::new(
            Setpoints {
                temperature: Band::new(0.5, 15.0),
                ..Setpoints::DEFAULT
            },
            SetpointPolicy::Validated,
        );
        let result = store.nudge(Channel::Temperature, Parameter::Lower, Direction::Down);
        assert_eq!(result, Err(SetpointError::ZeroDivisor(Channel::Temperature)));
        assert_eq!(store.setpoints().temperature.lower, 0.5);
    }

    #[test]
    fn test_validated_policy_unbounded_thresholds() {
        let mut store = SetpointStore::new(Setpoints::DEFAULT, SetpointPolicy::Validated);
        for _ in 0..40 {
            store.nudge(Channel::Co2, Parameter::Lower, Direction::Down).unwrap();
        }
        // Single thresholds carry no ordering invariant
        assert_eq!(store.setpoints().co2, -1200.0);
    }

    #[test]
    fn test_error_display() {
        extern crate std;
        use std::string::ToString;

        let err = SetpointError::InvertedBand(Channel::Gas);
        assert_eq!(err.to_string(), "GAS ETILENO: lower above upper");
    }
}
