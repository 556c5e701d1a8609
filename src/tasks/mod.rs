//! Async tasks for the FruitLife firmware.
//!
//! - `buttons`: Button edges -> menu state machine (high-priority interrupt executor)
//! - `buzzer`: Alert tones queued by the control loop

pub mod buttons;
pub mod buzzer;

pub use buttons::{CONTROL, button_task};
pub use buzzer::{Output, TONES, alert_task, play_tone};
