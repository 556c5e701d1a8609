//! Lock-free hand-off of the menu state from the button task to the main loop.
//!
//! The button task runs on a higher-priority interrupt executor and is the
//! only writer. Every field is its own atomic, so no lock is ever taken in
//! interrupt context. A version counter (even = stable, odd = write in
//! progress) lets the reader retry instead of returning a mix of two
//! publications.
//!
//! `portable-atomic` provides the atomics: the RP2040's Cortex-M0+ has no
//! compare-and-swap, and `AtomicF32` is not in `core`. Only plain loads and
//! stores are used here.

use core::sync::atomic::{Ordering, fence};

use portable_atomic::{AtomicBool, AtomicF32, AtomicU8, AtomicU32};

use super::setpoints::{Band, Parameter, Setpoints};
use super::{Channel, EditCursor, MenuState};

/// Value copy of everything the main loop needs from the menu.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct ControlSnapshot {
    pub channel: Channel,
    pub edit: EditCursor,
    pub setpoints: Setpoints,
}

impl ControlSnapshot {
    /// Snapshot of a menu that has never been touched.
    pub const INITIAL: Self = Self {
        channel: Channel::Gas,
        edit: EditCursor {
            active: false,
            channel: Channel::Gas,
            parameter: Parameter::Lower,
        },
        setpoints: Setpoints::DEFAULT,
    };

    /// Snapshot of `menu` taken in the same context (no atomics involved).
    pub const fn of(menu: &MenuState) -> Self {
        Self {
            channel: menu.channel(),
            edit: menu.edit(),
            setpoints: menu.setpoints(),
        }
    }
}

impl Default for ControlSnapshot {
    fn default() -> Self { Self::INITIAL }
}

/// Single-writer, many-reader cell holding the latest [`ControlSnapshot`].
pub struct SharedControl {
    version: AtomicU32,
    channel: AtomicU8,
    edit_active: AtomicBool,
    edit_channel: AtomicU8,
    edit_parameter: AtomicU8,
    gas_lower: AtomicF32,
    gas_upper: AtomicF32,
    temp_lower: AtomicF32,
    temp_upper: AtomicF32,
    humidity: AtomicF32,
    co2: AtomicF32,
}

impl SharedControl {
    /// Cell holding [`ControlSnapshot::INITIAL`]. Usable in a `static`.
    pub const fn new() -> Self {
        let sp = Setpoints::DEFAULT;
        Self {
            version: AtomicU32::new(0),
            channel: AtomicU8::new(Channel::Gas as u8),
            edit_active: AtomicBool::new(false),
            edit_channel: AtomicU8::new(Channel::Gas as u8),
            edit_parameter: AtomicU8::new(Parameter::Lower as u8),
            gas_lower: AtomicF32::new(sp.gas.lower),
            gas_upper: AtomicF32::new(sp.gas.upper),
            temp_lower: AtomicF32::new(sp.temperature.lower),
            temp_upper: AtomicF32::new(sp.temperature.upper),
            humidity: AtomicF32::new(sp.humidity),
            co2: AtomicF32::new(sp.co2),
        }
    }

    /// Publish the state of `menu`. Must only be called from one context.
    pub fn publish(
        &self,
        menu: &MenuState,
    ) {
        let version = self.version.load(Ordering::Relaxed);
        self.version.store(version.wrapping_add(1), Ordering::Relaxed);
        fence(Ordering::Release);

        let edit = menu.edit();
        let sp = menu.setpoints();
        self.channel.store(menu.channel().ordinal(), Ordering::Relaxed);
        self.edit_active.store(edit.active, Ordering::Relaxed);
        self.edit_channel.store(edit.channel.ordinal(), Ordering::Relaxed);
        self.edit_parameter.store(edit.parameter as u8, Ordering::Relaxed);
        self.gas_lower.store(sp.gas.lower, Ordering::Relaxed);
        self.gas_upper.store(sp.gas.upper, Ordering::Relaxed);
        self.temp_lower.store(sp.temperature.lower, Ordering::Relaxed);
        self.temp_upper.store(sp.temperature.upper, Ordering::Relaxed);
        self.humidity.store(sp.humidity, Ordering::Relaxed);
        self.co2.store(sp.co2, Ordering::Relaxed);

        self.version.store(version.wrapping_add(2), Ordering::Release);
    }

    /// Latest published state.
    ///
    /// Retries while a publication is in progress. The writer preempts the
    /// reader and never the other way round, so a retry always finds the
    /// writer finished.
    pub fn snapshot(&self) -> ControlSnapshot {
        loop {
            let before = self.version.load(Ordering::Acquire);
            let snapshot = self.load_fields();
            fence(Ordering::Acquire);
            let after = self.version.load(Ordering::Relaxed);

            if before == after && before % 2 == 0 {
                return snapshot;
            }
        }
    }

    fn load_fields(&self) -> ControlSnapshot {
        ControlSnapshot {
            channel: Channel::from_ordinal(self.channel.load(Ordering::Relaxed)),
            edit: EditCursor {
                active: self.edit_active.load(Ordering::Relaxed),
                channel: Channel::from_ordinal(self.edit_channel.load(Ordering::Relaxed)),
                parameter: Parameter::from_bits(self.edit_parameter.load(Ordering::Relaxed)),
            },
            setpoints: Setpoints {
                gas: Band::new(
                    self.gas_lower.load(Ordering::Relaxed),
                    self.gas_upper.load(Ordering::Relaxed),
                ),
                temperature: Band::new(
                    self.temp_lower.load(Ordering::Relaxed),
                    self.temp_upper.load(Ordering::Relaxed),
                ),
                humidity: self.humidity.load(Ordering::Relaxed),
                co2: self.co2.load(Ordering::Relaxed),
            },
        }
    }
}

impl Default for SharedControl {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Button, GlobalInputCooldown, InputEvent};

    #[test]
    fn test_new_matches_initial_snapshot() {
        let shared = SharedControl::new();
        assert_eq!(shared.snapshot(), ControlSnapshot::INITIAL);
        assert_eq!(ControlSnapshot::of(&MenuState::default()), ControlSnapshot::INITIAL);
    }

    #[test]
    fn test_publish_then_snapshot() {
        let shared = SharedControl::new();
        let mut menu = MenuState::default();
        let mut cooldown = GlobalInputCooldown::default();

        for (i, button) in [Button::Next, Button::Set, Button::Set, Button::Back].into_iter().enumerate() {
            menu.on_edge(&mut cooldown, InputEvent::press(button, i as u64 * 1_000));
            shared.publish(&menu);
        }

        let snapshot = shared.snapshot();
        assert_eq!(snapshot, ControlSnapshot::of(&menu));
        assert_eq!(snapshot.channel, Channel::Temperature);
        assert!(snapshot.edit.active);
        assert_eq!(snapshot.edit.parameter, Parameter::Upper);
        assert_eq!(snapshot.setpoints.temperature.upper, 14.5);
    }

    #[test]
    fn test_snapshot_never_mixes_publications() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::thread;

        let first = MenuState::default();
        let mut second = MenuState::default();
        let mut cooldown = GlobalInputCooldown::default();
        for (i, button) in [Button::Next, Button::Set, Button::Back, Button::Set].into_iter().enumerate() {
            second.on_edge(&mut cooldown, InputEvent::press(button, i as u64 * 1_000));
        }
        let expected = [ControlSnapshot::of(&first), ControlSnapshot::of(&second)];
        assert_ne!(expected[0], expected[1]);

        let shared = SharedControl::new();
        let done = AtomicBool::new(false);
        thread::scope(|s| {
            s.spawn(|| {
                for i in 0..200_000 {
                    shared.publish(if i % 2 == 0 { &second } else { &first });
                }
                done.store(true, Ordering::Release);
            });

            let mut reads = 0_u32;
            while !done.load(Ordering::Acquire) || reads == 0 {
                let snapshot = shared.snapshot();
                assert!(expected.contains(&snapshot), "torn snapshot: {snapshot:?}");
                reads += 1;
            }
        });
    }

    #[test]
    fn test_usable_as_static() {
        static CONTROL: SharedControl = SharedControl::new();
        let mut menu = MenuState::default();
        let mut cooldown = GlobalInputCooldown::default();
        menu.on_edge(&mut cooldown, InputEvent::press(Button::Back, 0));
        CONTROL.publish(&menu);
        assert_eq!(CONTROL.snapshot().channel, Channel::Summary);
    }
}
