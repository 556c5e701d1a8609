//! 5x5 face patterns for the WS2812 matrix.
//!
//! Rows are stored in transmission order. The matrix is mounted with its
//! first pixel at the bottom, so row 0 is the bottom row as seen by the user.

use crate::actuators::Rgb;
use crate::classify::Label;

/// Number of pixels in the matrix.
pub const PIXEL_COUNT: usize = 25;

/// Colour of lit pixels.
pub const MATRIX_COLOUR: Rgb = Rgb::new(0, 0, 80);

type Pattern = [[bool; 5]; 5];

const X: bool = true;
const O: bool = false;

const NEUTRAL: Pattern = [
    [O, X, X, X, O],
    [O, X, O, X, O],
    [O, O, O, O, O],
    [O, X, O, X, O],
    [O, X, O, X, O],
];

const HAPPY: Pattern = [
    [O, X, X, X, O],
    [X, O, O, O, X],
    [O, O, O, O, O],
    [O, X, O, X, O],
    [O, X, O, X, O],
];

const SAD: Pattern = [
    [O, X, O, X, O],
    [O, X, X, X, O],
    [O, O, O, O, O],
    [O, X, O, X, O],
    [O, X, O, X, O],
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Face {
    Neutral,
    /// Defined for completeness; no label selects it.
    Happy,
    Sad,
}

impl Face {
    /// Neutral on a channel's best band, sad otherwise.
    pub const fn for_label(label: Label) -> Self {
        if label.is_ideal() { Self::Neutral } else { Self::Sad }
    }

    pub const fn pattern(self) -> &'static Pattern {
        match self {
            Self::Neutral => &NEUTRAL,
            Self::Happy => &HAPPY,
            Self::Sad => &SAD,
        }
    }

    /// Pixel colours in transmission order; unlit pixels are off.
    pub fn pixels(
        self,
        colour: Rgb,
    ) -> [Rgb; PIXEL_COUNT] {
        let mut out = [Rgb::OFF; PIXEL_COUNT];
        for (pixel, lit) in out.iter_mut().zip(self.pattern().iter().flatten()) {
            if *lit {
                *pixel = colour;
            }
        }
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
