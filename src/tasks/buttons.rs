//! Button task: the only writer of the menu state.
//!
//! Runs on the high-priority interrupt executor so edges are handled even
//! while the control loop is busy flushing the display. Every edge goes
//! through the global input cooldown inside [`MenuState::on_edge`]; the
//! resulting state is published to [`CONTROL`] for the loop to read.

use defmt::{info, warn};
use embassy_futures::select::{Either3, select3};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use crate::state::{Button, GlobalInputCooldown, InputEvent, MenuAction, MenuState, SetpointStore, SharedControl};

/// Menu state published by the button task, read by the control loop.
pub static CONTROL: SharedControl = SharedControl::new();

/// Wait for presses on Next (GPIO5), Back (GPIO6) and Set (GPIO22).
///
/// Inputs are active-low with pull-ups; only falling edges are awaited.
#[embassy_executor::task]
pub async fn button_task(
    mut next: Input<'static>,
    mut back: Input<'static>,
    mut set: Input<'static>,
    store: SetpointStore,
) {
    info!("Button task started (policy {})", store.policy());

    let mut menu = MenuState::new(store);
    let mut cooldown = GlobalInputCooldown::default();
    CONTROL.publish(&menu);

    loop {
        let button = match select3(
            next.wait_for_falling_edge(),
            back.wait_for_falling_edge(),
            set.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => Button::Next,
            Either3::Second(()) => Button::Back,
            Either3::Third(()) => Button::Set,
        };

        let event = InputEvent::press(button, Instant::now().as_millis());
        match menu.on_edge(&mut cooldown, event) {
            MenuAction::Debounced | MenuAction::NoOp => continue,
            MenuAction::SetpointRejected(err) => warn!("Setpoint edit rejected: {}", err),
            action => info!("{}", action),
        }

        CONTROL.publish(&menu);
    }
}
