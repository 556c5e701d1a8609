//! SSD1306 OLED (128x64) on I2C1.
//!
//! Pin mapping:
//! - SDA: GPIO14
//! - SCL: GPIO15
//! - Address: 0x3C (ssd1306 default), 400 kHz
//!
//! Drawing goes to the driver's RAM buffer; [`Oled::show`] flushes it. Flush
//! errors are logged and the frame is dropped.

use defmt::{Debug2Format, warn};
use embassy_rp::i2c::{Blocking, Config as I2cConfig, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::{SPLASH_FRAME_MS, SPLASH_FRAMES};
use crate::screen::{ScreenText, draw_splash_frame, draw_text};

type Driver = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// I2C configuration for the SSD1306 (fast mode).
pub fn display_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = 400_000;
    config
}

pub struct Oled {
    driver: Driver,
}

impl Oled {
    /// Initialise the panel and blank it.
    pub fn new(i2c: I2c<'static, I2C1, Blocking>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();
        let mut oled = Self { driver };

        if let Err(err) = oled.driver.init() {
            warn!("OLED init failed: {}", Debug2Format(&err));
        }
        oled.driver.clear_buffer();
        oled.flush();
        oled
    }

    /// Draw and flush one refresh.
    pub fn show(
        &mut self,
        text: &ScreenText,
    ) {
        draw_text(&mut self.driver, text);
        self.flush();
    }

    /// Boot splash: `SPLASH_FRAMES` frames of `SPLASH_FRAME_MS` each.
    pub async fn splash(&mut self) {
        for frame in 0..SPLASH_FRAMES {
            draw_splash_frame(&mut self.driver, frame);
            self.flush();
            Timer::after_millis(SPLASH_FRAME_MS).await;
        }
    }

    fn flush(&mut self) {
        if let Err(err) = self.driver.flush() {
            warn!("OLED flush failed: {}", Debug2Format(&err));
        }
    }
}
