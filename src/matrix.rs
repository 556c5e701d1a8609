//! 5x5 WS2812 matrix on GPIO7, driven by the PIO0 WS2812 program with DMA.

use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use crate::actuators::Rgb;
use crate::faces::{Face, MATRIX_COLOUR, PIXEL_COUNT};

pub struct Matrix {
    leds: PioWs2812<'static, PIO0, 0, PIXEL_COUNT>,
    shown: Option<Face>,
}

impl Matrix {
    pub const fn new(leds: PioWs2812<'static, PIO0, 0, PIXEL_COUNT>) -> Self { Self { leds, shown: None } }

    /// Turn every pixel off.
    pub async fn clear(&mut self) {
        self.leds.write(&[RGB8::default(); PIXEL_COUNT]).await;
        self.shown = None;
    }

    /// Show `face`. Re-sending an unchanged face is skipped.
    pub async fn show(
        &mut self,
        face: Face,
    ) {
        if self.shown == Some(face) {
            return;
        }
        let pixels = face.pixels(MATRIX_COLOUR).map(|Rgb { r, g, b }| RGB8::new(r, g, b));
        self.leds.write(&pixels).await;
        self.shown = Some(face);
    }
}
