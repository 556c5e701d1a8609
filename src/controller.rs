//! One iteration of the control loop, independent of any peripheral.
//!
//! The firmware reads the ADC, takes a [`ControlSnapshot`] from the shared
//! cell and calls [`Controller::step`]; the returned [`Frame`] says what to put
//! on the OLED, the RGB indicator, the matrix and the alert buzzer.

use crate::actuators::{self, Rgb};
use crate::blink::BlinkSchedule;
use crate::classify::{Label, classify_all};
use crate::config::BLINK_INTERVAL_MS;
use crate::faces::Face;
use crate::sampler::{Measurements, RawSample, sample};
use crate::screen::{self, ScreenText};
use crate::state::{Channel, ControlSnapshot};
use crate::stats::{Accumulator, Summary};

/// Outputs of one iteration.
#[derive(Clone, PartialEq, Debug)]
pub struct Frame {
    pub channel: Channel,
    pub measurements: Measurements,
    /// Labels of all four measurements, in channel order.
    pub labels: [Label; 4],
    pub screen: ScreenText,
    /// RGB indicator after blinking.
    pub indicator: Rgb,
    /// Matrix face, `None` on the summary (matrix left untouched).
    pub face: Option<Face>,
    /// Displayed channel is outside its ideal band.
    pub alert: bool,
    pub summary: Option<Summary>,
}

impl Frame {
    /// Label of the displayed channel, `None` on the summary.
    pub fn label(&self) -> Option<Label> { self.channel.measurement_index().map(|i| self.labels[i]) }

    /// Value of the displayed channel, `None` on the summary.
    pub fn value(&self) -> Option<f32> { self.measurements.get(self.channel) }
}

/// Per-loop state owned by the main loop: running averages and blink phase.
#[derive(Clone, Copy, Debug)]
pub struct Controller {
    accumulator: Accumulator,
    blink: BlinkSchedule,
}

impl Controller {
    pub const fn new(start_ms: u64) -> Self {
        Self {
            accumulator: Accumulator::new(start_ms),
            blink: BlinkSchedule::new(BLINK_INTERVAL_MS, start_ms),
        }
    }

    pub fn step(
        &mut self,
        raw: RawSample,
        control: &ControlSnapshot,
        now_ms: u64,
    ) -> Frame {
        let measurements = sample(raw);
        self.accumulator.update(&measurements);
        let summary = self.accumulator.snapshot(now_ms);

        let setpoints = &control.setpoints;
        let labels = classify_all(&measurements, setpoints);
        let channel = control.channel;
        let label = channel.measurement_index().map(|i| labels[i]);

        let screen = match (label, measurements.get(channel)) {
            (Some(_), Some(_)) if control.edit.active => screen::edit_view(control.edit, setpoints),
            (Some(label), Some(value)) => screen::normal_view(channel, value, label),
            _ => summary.as_ref().map(screen::summary_view).unwrap_or_default(),
        };

        let mut indicator = actuators::indicator(channel, &measurements, label, setpoints);
        if matches!(channel, Channel::Gas | Channel::Co2) && !self.blink.poll(now_ms) {
            indicator = Rgb::OFF;
        }

        Frame {
            channel,
            measurements,
            labels,
            screen,
            indicator,
            face: label.map(Face::for_label),
            alert: label.is_some_and(|l| !l.is_ideal()),
            summary,
        }
    }

    #[inline]
    pub const fn accumulator(&self) -> &Accumulator { &self.accumulator }
}

// =============================================================================
// Unit Tests
// =============================================================================
