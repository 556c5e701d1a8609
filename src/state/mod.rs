//! Menu and setpoint state shared between the button task and the main loop.
//!
//! - `channel`: Channel navigation enum (Gas, Temperature, Humidity, CO2, Summary)
//! - `cooldown`: Global input cooldown (one debounce timestamp for all buttons)
//! - `setpoints`: Setpoint records, validation policy and the edit store
//! - `menu`: Menu/edit state machine driven by button edges
//! - `shared`: Lock-free publication of the menu state to the main loop

mod channel;
mod cooldown;
mod menu;
mod setpoints;
mod shared;

pub use channel::Channel;
pub use cooldown::GlobalInputCooldown;
pub use menu::{Button, Edge, EditCursor, InputEvent, MenuAction, MenuState};
pub use setpoints::{
    Band,
    Direction,
    Parameter,
    SetpointError,
    SetpointPolicy,
    SetpointStore,
    Setpoints,
    edit_step,
};
pub use shared::{ControlSnapshot, SharedControl};
