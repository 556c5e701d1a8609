//! OLED text model and rendering.
//!
//! Every refresh is three lines of text drawn at fixed rows. The controller
//! builds a [`ScreenText`]; the firmware draws it into the SSD1306 buffer and
//! the host runner prints it.
//!
//! # Views
//!
//! - Normal: title, `Valor: {value:.2} {unit}`, `Status: {label}`
//! - Edit: `Set ...`, `Valor: {setpoint:.2} {unit}`, `Pressione SET para salvar`
//! - Summary: means of all four channels and elapsed seconds
//!
//! Lines longer than the panel are clipped by the display, not here.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::iso_8859_1::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

use crate::classify::Label;
use crate::state::{Channel, EditCursor, Parameter, Setpoints};
use crate::stats::Summary;

/// Capacity of one line in bytes.
pub const LINE_CAPACITY: usize = 32;

/// Top edge of each line in pixels.
pub const LINE_Y: [i32; 3] = [0, 20, 40];

pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 64;

pub type Line = String<LINE_CAPACITY>;

/// The three lines of one refresh.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ScreenText {
    pub lines: [Line; 3],
}

impl ScreenText {
    pub fn line(
        &self,
        index: usize,
    ) -> &str {
        self.lines.get(index).map_or("", Line::as_str)
    }
}

// =============================================================================
// Views
// =============================================================================

/// Live reading of a measured channel.
pub fn normal_view(
    channel: Channel,
    value: f32,
    label: Label,
) -> ScreenText {
    let mut text = ScreenText::default();
    let [title, reading, status] = &mut text.lines;
    let _ = title.push_str(channel.title());
    let _ = write!(reading, "Valor: {value:.2} {}", channel.unit());
    let _ = write!(status, "Status: {}", label.text());
    text
}

/// Setpoint under edit.
///
/// The summary has no setpoints; its edit view is blank.
pub fn edit_view(
    cursor: EditCursor,
    setpoints: &Setpoints,
) -> ScreenText {
    let mut text = ScreenText::default();
    let Some(value) = setpoints.get(cursor.channel, cursor.parameter) else {
        return text;
    };

    let bound = match cursor.parameter {
        Parameter::Lower => "LOW",
        Parameter::Upper => "HIGH",
    };

    let [title, reading, hint] = &mut text.lines;
    let _ = match cursor.channel {
        Channel::Gas => write!(title, "Set Etileno {bound}"),
        Channel::Temperature => write!(title, "Set Temp {bound}"),
        Channel::Humidity => title.write_str("Set Umidade"),
        _ => title.write_str("Set CO2"),
    };
    let _ = write!(reading, "Valor: {value:.2} {}", cursor.channel.unit());
    let _ = hint.push_str("Pressione SET para salvar");
    text
}

/// Averages since boot.
pub fn summary_view(summary: &Summary) -> ScreenText {
    let mut text = ScreenText::default();
    let means = &summary.means;
    let [first, second, third] = &mut text.lines;
    let _ = write!(first, "Et:{:.1}ppm T:{:.1}C", means.gas, means.temperature);
    let _ = write!(second, "Um:{:.1}% CO2:{:.0}", means.humidity, means.co2);
    let _ = write!(third, "Tempo:{:.0}s", summary.elapsed_secs());
    text
}

// =============================================================================
// Rendering
// =============================================================================

/// Clear `display` and draw the three lines.
pub fn draw_text<D>(
    display: &mut D,
    text: &ScreenText,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off).ok();

    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    for (line, y) in text.lines.iter().zip(LINE_Y) {
        Text::with_baseline(line, Point::new(0, y), style, Baseline::Top)
            .draw(display)
            .ok();
    }
}

/// One frame of the boot splash. The frame border is drawn on even frames.
pub fn draw_splash_frame<D>(
    display: &mut D,
    frame: u8,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off).ok();

    let center = Point::new(SCREEN_WIDTH as i32 / 2, SCREEN_HEIGHT as i32 / 2);
    let style = MonoTextStyle::new(&profont::PROFONT_14_POINT, BinaryColor::On);
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style("FruitLife", center, style, centered)
        .draw(display)
        .ok();

    if frame % 2 == 0 {
        Rectangle::with_center(center, Size::new(108, 28))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::sampler::Measurements;

    /// 64x64 mock; the right half of the panel is clipped.
    fn mock() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_normal_view_lines() {
        let text = normal_view(Channel::Temperature, 12.345, Label::Ideal);
        assert_eq!(text.line(0), "TEMPERATURA");
        assert_eq!(text.line(1), "Valor: 12.35 °C");
        assert_eq!(text.line(2), "Status: Ideal");

        let text = normal_view(Channel::Gas, 5.0, Label::RapidRipening);
        assert_eq!(text.line(1), "Valor: 5.00 ppm");
        assert_eq!(text.line(2), "Status: Amadurec. rapido");
    }

    #[test]
    fn test_edit_view_titles() {
        let sp = Setpoints::DEFAULT;
        let cursor = |channel, parameter| EditCursor {
            active: true,
            channel,
            parameter,
        };

        let text = edit_view(cursor(Channel::Gas, Parameter::Upper), &sp);
        assert_eq!(text.line(0), "Set Etileno HIGH");
        assert_eq!(text.line(1), "Valor: 7.00 ppm");
        assert_eq!(text.line(2), "Pressione SET para salvar");

        assert_eq!(edit_view(cursor(Channel::Temperature, Parameter::Lower), &sp).line(0), "Set Temp LOW");
        assert_eq!(edit_view(cursor(Channel::Humidity, Parameter::Lower), &sp).line(1), "Valor: 90.00 %");

        let co2 = edit_view(cursor(Channel::Co2, Parameter::Lower), &sp);
        assert_eq!(co2.line(0), "Set CO2");
        assert_eq!(co2.line(1), "Valor: 800.00 ppm");

        assert_eq!(edit_view(cursor(Channel::Summary, Parameter::Lower), &sp), ScreenText::default());
    }

    #[test]
    fn test_summary_view_lines() {
        let summary = Summary {
            means: Measurements::from_array([4.26, 12.5, 61.0, 425.4]),
            elapsed_ms: 42_400,
        };
        let text = summary_view(&summary);
        assert_eq!(text.line(0), "Et:4.3ppm T:12.5C");
        assert_eq!(text.line(1), "Um:61.0% CO2:425");
        assert_eq!(text.line(2), "Tempo:42s");
    }

    #[test]
    fn test_draw_text_lights_each_row() {
        let mut display = mock();
        draw_text(&mut display, &normal_view(Channel::Co2, 900.0, Label::High));

        let lit_in_rows = |top: i32, bottom: i32| {
            (top..bottom).any(|y| (0..64).any(|x| display.get_pixel(Point::new(x, y)) == Some(BinaryColor::On)))
        };
        assert!(lit_in_rows(0, 10));
        assert!(lit_in_rows(20, 30));
        assert!(lit_in_rows(40, 50));
        assert!(!lit_in_rows(10, 20));
    }

    #[test]
    fn test_splash_border_on_even_frames() {
        let mut even = mock();
        let mut odd = mock();
        draw_splash_frame(&mut even, 0);
        draw_splash_frame(&mut odd, 1);

        // Top-left corner of the border
        let corner = Rectangle::with_center(Point::new(64, 32), Size::new(108, 28)).top_left;
        assert_eq!(corner, Point::new(11, 19));
        assert_eq!(even.get_pixel(corner), Some(BinaryColor::On));
        assert_ne!(odd.get_pixel(corner), Some(BinaryColor::On));
    }
}
