//! FruitLife fruit storage monitor for Raspberry Pi Pico (RP2040).
//!
//! Two potentiometers simulate ethylene, temperature, humidity and CO2
//! sensors. Each reading is classified against operator setpoints and shown
//! on the OLED, the RGB indicator and the 5x5 matrix.
//!
//! # Architecture
//!
//! - Button task (interrupt executor, SWI_IRQ_1 at P2): owns the menu state and
//!   publishes it to a lock-free cell
//! - Main task (thread executor): samples, classifies, renders, queues alerts
//! - Alert task (thread executor): plays queued alert tones
//!
//! # Button Controls
//!
//! - **Next** (GPIO5): Next channel, or raise the setpoint while editing
//! - **Back** (GPIO6): Previous channel, or lower the setpoint while editing
//! - **Set** (GPIO22): Start editing, move LOW -> HIGH, finish editing
//!
//! On a non-ARM host this binary instead runs a scripted session of the same
//! control logic and prints each refresh.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the firmware (not testable on host)
#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod indicator;
#[cfg(target_arch = "arm")]
mod matrix;
#[cfg(target_arch = "arm")]
mod tasks;

// Scripted runner for the host
#[cfg(not(target_arch = "arm"))]
mod sim;

// Re-export testable modules from library for local use
// (These are defined in lib.rs with host-testable code)
mod actuators {
    pub use fruitlife::actuators::*;
}
mod config {
    pub use fruitlife::config::*;
}
mod faces {
    pub use fruitlife::faces::*;
}
mod sampler {
    pub use fruitlife::sampler::*;
}
mod screen {
    pub use fruitlife::screen::*;
}
mod state {
    pub use fruitlife::state::*;
}
mod tones {
    pub use fruitlife::tones::*;
}

#[cfg(not(target_arch = "arm"))]
fn main() { sim::run(); }

// =============================================================================
// RP2040 Firmware
// =============================================================================

#[cfg(target_arch = "arm")]
mod firmware {
    use defmt::{info, warn};
    use embassy_executor::{InterruptExecutor, Spawner};
    use embassy_rp::adc::{self, Adc, Channel as AdcChannel};
    use embassy_rp::bind_interrupts;
    use embassy_rp::gpio::{Input, Pull};
    use embassy_rp::i2c::I2c;
    use embassy_rp::interrupt;
    use embassy_rp::interrupt::{InterruptExt, Priority};
    use embassy_rp::peripherals::PIO0;
    use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
    use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
    use embassy_rp::pwm::{Config as PwmConfig, Pwm};
    use embassy_time::{Instant, Timer};
    use fruitlife::Controller;
    use {defmt_rtt as _, panic_probe as _};

    use crate::config::{LOOP_YIELD_MS, MELODY_GAP_MS, STATUS_LOG_INTERVAL_MS};
    use crate::display::{Oled, display_i2c_config};
    use crate::indicator::Indicator;
    use crate::matrix::Matrix;
    use crate::sampler::RawSample;
    use crate::state::{SetpointPolicy, SetpointStore, Setpoints};
    use crate::tasks::{CONTROL, Output, TONES, alert_task, button_task, play_tone};
    use crate::tones::{ALERT, STARTUP_MELODY};

    bind_interrupts!(struct Irqs {
        PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
    });

    // =============================================================================
    // High-Priority Executor (buttons)
    // =============================================================================

    static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

    #[interrupt]
    unsafe fn SWI_IRQ_1() {
        // SAFETY: called from the ISR it was started on
        unsafe { EXECUTOR_HIGH.on_interrupt() }
    }

    /// Setpoint policy selected at build time.
    const fn boot_policy() -> SetpointPolicy {
        if cfg!(feature = "validated-setpoints") {
            SetpointPolicy::Validated
        } else {
            SetpointPolicy::Literal
        }
    }

    /// Read both potentiometers. A failed read keeps the previous raw value.
    fn read_pots(
        adc: &mut Adc<'static, adc::Blocking>,
        gas: &mut AdcChannel<'static>,
        climate: &mut AdcChannel<'static>,
        last: RawSample,
    ) -> RawSample {
        let gas = adc.blocking_read(gas).unwrap_or_else(|err| {
            warn!("Gas ADC read failed: {}", err);
            last.gas
        });
        let climate = adc.blocking_read(climate).unwrap_or_else(|err| {
            warn!("Climate ADC read failed: {}", err);
            last.climate
        });
        RawSample::new(gas, climate)
    }

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("FruitLife starting...");

        let mut p = embassy_rp::init(Default::default());

        // --- OLED + splash ---
        let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, display_i2c_config());
        let mut oled = Oled::new(i2c);
        info!("Display initialized");

        // --- WS2812 matrix (all off at boot) ---
        let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
        let program = PioWs2812Program::new(&mut common);
        let mut matrix = Matrix::new(PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program));
        matrix.clear().await;

        oled.splash().await;

        // --- Startup melody on buzzer 1 (GPIO10, slice 5 A) ---
        {
            let mut buzzer = Pwm::new_output_a(p.PWM_SLICE5.reborrow(), p.PIN_10.reborrow(), PwmConfig::default());
            for tone in STARTUP_MELODY {
                play_tone(&mut buzzer, Output::A, tone).await;
                Timer::after_millis(MELODY_GAP_MS).await;
            }
        }

        // --- RGB indicator (slice 5 is free again) ---
        let red_blue = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, PwmConfig::default());
        let green = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, PwmConfig::default());
        let mut indicator = Indicator::new(red_blue, green);

        // --- Potentiometers: GPIO27 = gas/CO2 (ADC1), GPIO26 = temperature/humidity (ADC0) ---
        let mut adc = Adc::new_blocking(p.ADC, adc::Config::default());
        let mut gas_pot = AdcChannel::new_pin(p.PIN_27, Pull::None);
        let mut climate_pot = AdcChannel::new_pin(p.PIN_26, Pull::None);

        // --- Alert buzzer (GPIO21, slice 2 B) ---
        let alert_pwm = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, PwmConfig::default());
        spawner.spawn(alert_task(alert_pwm)).unwrap();
        info!("Alert task spawned");

        // --- Buttons on the high-priority executor ---
        let next = Input::new(p.PIN_5, Pull::Up);
        let back = Input::new(p.PIN_6, Pull::Up);
        let set = Input::new(p.PIN_22, Pull::Up);
        let store = SetpointStore::new(Setpoints::DEFAULT, boot_policy());

        interrupt::SWI_IRQ_1.set_priority(Priority::P2);
        let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
        high_spawner.spawn(button_task(next, back, set, store)).unwrap();
        info!("Button task spawned");

        // =========================================================================
        // Control Loop
        // =========================================================================

        let mut controller = Controller::new(Instant::now().as_millis());
        let mut raw = RawSample::default();
        let mut last_status_log = Instant::now();

        loop {
            raw = read_pots(&mut adc, &mut gas_pot, &mut climate_pot, raw);
            let control = CONTROL.snapshot();
            let frame = controller.step(raw, &control, Instant::now().as_millis());

            oled.show(&frame.screen);
            indicator.set(frame.indicator);
            if let Some(face) = frame.face {
                matrix.show(face).await;
            }
            if frame.alert {
                // Dropped while the previous alert is still queued
                let _ = TONES.try_send(ALERT);
            }

            if last_status_log.elapsed().as_millis() >= STATUS_LOG_INTERVAL_MS {
                info!(
                    "{} value={} status={} edit={} samples={}",
                    frame.channel,
                    frame.value(),
                    frame.label(),
                    control.edit.active,
                    controller.accumulator().sample_count()
                );
                if let Err(err) = control.setpoints.check() {
                    warn!("Setpoints inconsistent: {}", err);
                }
                last_status_log = Instant::now();
            }

            Timer::after_millis(LOOP_YIELD_MS).await;
        }
    }
}
