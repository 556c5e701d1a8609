//! Menu and setpoint-edit state machine.
//!
//! Owned by the button task. Every edge first passes the
//! [`GlobalInputCooldown`]; only falling edges that pass it cause a transition.
//!
//! # Transitions
//!
//! | State       | Set                              | Next / Back                 |
//! |-------------|----------------------------------|-----------------------------|
//! | Navigating  | start editing (Lower)            | next / previous channel     |
//! | Editing     | Lower -> Upper on banded channel | nudge the edited setpoint   |
//! |             | otherwise finish editing         | (never changes the channel) |
//!
//! Editing started on the summary view is inert: Next/Back do nothing and Set
//! finishes it.

use super::setpoints::{Direction, Parameter, SetpointError, SetpointStore, Setpoints};
use super::{Channel, GlobalInputCooldown};

// =============================================================================
// Input Events
// =============================================================================

/// The three front-panel buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Button {
    Next,
    Back,
    Set,
}

/// Electrical edge of an active-low button. `Falling` is a press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Edge {
    Falling,
    Rising,
}

/// A timestamped button edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct InputEvent {
    pub button: Button,
    pub edge: Edge,
    pub at_ms: u64,
}

impl InputEvent {
    /// A press (falling edge) of `button` at `at_ms`.
    pub const fn press(
        button: Button,
        at_ms: u64,
    ) -> Self {
        Self {
            button,
            edge: Edge::Falling,
            at_ms,
        }
    }
}

// =============================================================================
// Edit Cursor and Actions
// =============================================================================

/// Which setpoint, if any, the buttons are currently editing.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct EditCursor {
    pub active: bool,
    pub channel: Channel,
    pub parameter: Parameter,
}

/// Outcome of a single edge, used for logging and tests.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum MenuAction {
    /// Dropped by the input cooldown.
    Debounced,
    /// Accepted but had no effect (rising edge, or Next/Back in inert editing).
    NoOp,
    Navigated(Channel),
    EditStarted(Channel),
    /// Moved from the lower to the upper setpoint of a banded channel.
    ParameterAdvanced(Channel),
    EditFinished(Channel),
    SetpointChanged {
        channel: Channel,
        parameter: Parameter,
        value: f32,
    },
    /// Edit refused by the validated setpoint policy.
    SetpointRejected(SetpointError),
}

// =============================================================================
// Menu State
// =============================================================================

/// Displayed channel, edit cursor and setpoints.
#[derive(Clone, Copy, Debug)]
pub struct MenuState {
    channel: Channel,
    edit: EditCursor,
    store: SetpointStore,
}

impl MenuState {
    /// Start on the gas channel, not editing.
    pub const fn new(store: SetpointStore) -> Self {
        Self {
            channel: Channel::Gas,
            edit: EditCursor {
                active: false,
                channel: Channel::Gas,
                parameter: Parameter::Lower,
            },
            store,
        }
    }

    #[inline]
    pub const fn channel(&self) -> Channel { self.channel }

    #[inline]
    pub const fn edit(&self) -> EditCursor { self.edit }

    #[inline]
    pub const fn setpoints(&self) -> Setpoints { self.store.setpoints() }

    /// Apply one button edge.
    pub fn on_edge(
        &mut self,
        cooldown: &mut GlobalInputCooldown,
        event: InputEvent,
    ) -> MenuAction {
        // Every edge consumes the cooldown, whatever the button or edge type
        if !cooldown.accept(event.at_ms) {
            return MenuAction::Debounced;
        }
        if event.edge != Edge::Falling {
            return MenuAction::NoOp;
        }

        match (event.button, self.edit.active) {
            (Button::Set, false) => {
                self.edit = EditCursor {
                    active: true,
                    channel: self.channel,
                    parameter: Parameter::Lower,
                };
                MenuAction::EditStarted(self.channel)
            }
            (Button::Set, true) => {
                if self.edit.channel.has_band() && self.edit.parameter == Parameter::Lower {
                    self.edit.parameter = Parameter::Upper;
                    MenuAction::ParameterAdvanced(self.edit.channel)
                } else {
                    self.edit.active = false;
                    MenuAction::EditFinished(self.edit.channel)
                }
            }
            (Button::Next, false) => {
                self.channel = self.channel.next();
                MenuAction::Navigated(self.channel)
            }
            (Button::Back, false) => {
                self.channel = self.channel.prev();
                MenuAction::Navigated(self.channel)
            }
            (Button::Next, true) => self.nudge(Direction::Up),
            (Button::Back, true) => self.nudge(Direction::Down),
        }
    }

    fn nudge(
        &mut self,
        direction: Direction,
    ) -> MenuAction {
        let EditCursor {
            channel, parameter, ..
        } = self.edit;

        match self.store.nudge(channel, parameter, direction) {
            Ok(Some(value)) => MenuAction::SetpointChanged {
                channel,
                parameter,
                value,
            },
            Ok(None) => MenuAction::NoOp,
            Err(err) => MenuAction::SetpointRejected(err),
        }
    }
}

impl Default for MenuState {
    fn default() -> Self { Self::new(SetpointStore::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
