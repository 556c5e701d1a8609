//! RGB indicator LED on three PWM channels (top 255, duty = colour component).
//!
//! Pin mapping:
//! - Red: GPIO13 (PWM slice 6 B)
//! - Green: GPIO11 (PWM slice 5 B)
//! - Blue: GPIO12 (PWM slice 6 A)
//!
//! Slice 5 A (GPIO10) is the melody buzzer, so the green channel is only
//! configured after the startup melody has finished.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use crate::actuators::Rgb;
use crate::config::DRIVE_MAX;

fn base_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = u16::from(DRIVE_MAX);
    config
}

pub struct Indicator {
    red_blue: Pwm<'static>,
    green: Pwm<'static>,
    last: Option<Rgb>,
}

impl Indicator {
    /// `red_blue`: slice 6 with A = blue, B = red. `green`: slice 5 output B.
    pub fn new(
        mut red_blue: Pwm<'static>,
        mut green: Pwm<'static>,
    ) -> Self {
        red_blue.set_config(&base_config());
        green.set_config(&base_config());
        Self {
            red_blue,
            green,
            last: None,
        }
    }

    pub fn set(
        &mut self,
        colour: Rgb,
    ) {
        if self.last == Some(colour) {
            return;
        }

        let mut config = base_config();
        config.compare_a = u16::from(colour.b);
        config.compare_b = u16::from(colour.r);
        self.red_blue.set_config(&config);

        let mut config = base_config();
        config.compare_b = u16::from(colour.g);
        self.green.set_config(&config);

        self.last = Some(colour);
    }
}
