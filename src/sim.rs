//! Host runner: a scripted session of the control logic.
//!
//! Stands in for the board when the binary is built for a desktop target.
//! The potentiometers follow slow triangle waves, button presses come from a
//! fixed script, and the OLED text is printed with the indicator colour and
//! the matrix face.

use fruitlife::Controller;

use crate::config::RAW_MAX;
use crate::faces::Face;
use crate::sampler::RawSample;
use crate::state::{Button, GlobalInputCooldown, InputEvent, MenuState, SharedControl};

/// Simulated loop period.
const STEP_MS: u64 = 50;

/// Refreshes are printed at this cadence, and whenever the view changes.
const PRINT_EVERY_MS: u64 = 500;

/// Length of the session.
const DURATION_MS: u64 = 9_000;

/// Button presses as `(time, button)`, in time order.
const SCRIPT: [(u64, Button); 12] = [
    (1_000, Button::Next), // Temperature
    (1_500, Button::Set),  // Edit LOW
    (1_600, Button::Next), // Inside the cooldown, dropped
    (1_800, Button::Next), // LOW +0.5
    (2_100, Button::Set),  // Edit HIGH
    (2_400, Button::Back), // HIGH -0.5
    (2_700, Button::Set),  // Done
    (3_500, Button::Next), // Humidity
    (4_500, Button::Next), // CO2
    (5_500, Button::Next), // Summary
    (7_000, Button::Next), // Gas
    (8_000, Button::Back), // Summary
];

/// Triangle wave over `0..=RAW_MAX` with the given period.
fn triangle(
    now_ms: u64,
    period_ms: u64,
) -> u16 {
    let phase = now_ms % period_ms;
    let half = period_ms / 2;
    let rising = if phase < half { phase } else { period_ms - phase };
    (rising * u64::from(RAW_MAX) / half) as u16
}

fn pots(now_ms: u64) -> RawSample { RawSample::new(triangle(now_ms, 6_000), triangle(now_ms + 1_500, 8_000)) }

fn print_face(face: Face) {
    // Row 0 is the bottom row of the mounted matrix
    for row in face.pattern().iter().rev() {
        let line: String = row.iter().map(|lit| if *lit { '#' } else { '.' }).collect();
        println!("    {line}");
    }
}

pub fn run() {
    println!("FruitLife host session ({DURATION_MS} ms, {STEP_MS} ms steps)");

    let control = SharedControl::new();
    let mut menu = MenuState::default();
    let mut cooldown = GlobalInputCooldown::default();
    let mut controller = Controller::new(0);
    let mut script = SCRIPT.iter().copied().peekable();
    let mut last_title = None;

    for now_ms in (0..=DURATION_MS).step_by(STEP_MS as usize) {
        while let Some((at_ms, button)) = script.next_if(|(at_ms, _)| *at_ms <= now_ms) {
            let action = menu.on_edge(&mut cooldown, InputEvent::press(button, at_ms));
            println!("[{at_ms:>5} ms] {button:?} -> {action:?}");
            control.publish(&menu);
        }

        let frame = controller.step(pots(now_ms), &control.snapshot(), now_ms);
        let title = frame.screen.lines[0].clone();
        if now_ms % PRINT_EVERY_MS != 0 && last_title.as_ref() == Some(&title) {
            continue;
        }

        println!("[{now_ms:>5} ms] {:?}", frame.channel);
        for line in &frame.screen.lines {
            println!("    | {line}");
        }
        let rgb = frame.indicator;
        println!("    rgb=({}, {}, {}) alert={}", rgb.r, rgb.g, rgb.b, frame.alert);
        if let Some(face) = frame.face {
            print_face(face);
        }
        last_title = Some(title);
    }

    if let Err(err) = control.snapshot().setpoints.check() {
        println!("Setpoints inconsistent: {err}");
    }
    println!("{} samples", controller.accumulator().sample_count());
}
