//! Buzzer output.
//!
//! [`play_tone`] drives one PWM channel at 50% duty for the length of a
//! tone. The startup melody calls it directly during boot; alerts are queued
//! on [`TONES`] and played by [`alert_task`] so the control loop never waits on
//! the buzzer.

use defmt::{debug, warn};
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Timer;

use crate::tones::{Tone, tone_pwm_params};

/// Alert queue. Senders use `try_send` and drop the tone when it is full.
pub static TONES: Channel<CriticalSectionRawMutex, Tone, 1> = Channel::new();

/// PWM output of a slice the buzzer is wired to.
#[derive(Clone, Copy)]
pub enum Output {
    A,
    B,
}

/// Play `tone` on `output` of `pwm`, then silence it.
pub async fn play_tone(
    pwm: &mut Pwm<'_>,
    output: Output,
    tone: Tone,
) {
    let Some(params) = tone_pwm_params(clk_sys_freq(), tone.freq_hz) else {
        warn!("Tone {} Hz out of PWM range, skipped", tone.freq_hz);
        return;
    };

    let mut config = PwmConfig::default();
    config.divider = params.divider.into();
    config.top = params.top;
    match output {
        Output::A => config.compare_a = params.half_duty(),
        Output::B => config.compare_b = params.half_duty(),
    }
    pwm.set_config(&config);

    Timer::after_millis(tone.duration_ms).await;

    // Compare 0 holds the pin low
    pwm.set_config(&PwmConfig::default());
}

/// Plays queued alert tones on the alert buzzer (GPIO21, PWM slice 2 B).
#[embassy_executor::task]
pub async fn alert_task(mut pwm: Pwm<'static>) {
    debug!("Alert task started");

    loop {
        let tone = TONES.receive().await;
        play_tone(&mut pwm, Output::B, tone).await;
    }
}
