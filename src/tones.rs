//! Buzzer tones: startup melody, alert beep and PWM timing.
//!
//! The buzzers are driven by a PWM slice at 50% duty. A tone frequency maps to
//! an integer clock divider and a 16-bit counter wrap (`top`).

/// A single note.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Tone {
    pub freq_hz: u32,
    pub duration_ms: u64,
}

impl Tone {
    pub const fn new(
        freq_hz: u32,
        duration_ms: u64,
    ) -> Self {
        Self { freq_hz, duration_ms }
    }
}

/// C4 D4 E4 G4 E4 C4, 200 ms each.
pub const STARTUP_MELODY: [Tone; 6] = [
    Tone::new(261, 200),
    Tone::new(293, 200),
    Tone::new(329, 200),
    Tone::new(392, 200),
    Tone::new(329, 200),
    Tone::new(261, 200),
];

/// G4 beep raised while the displayed channel is out of its ideal band.
pub const ALERT: Tone = Tone::new(392, 200);

/// Clock divider and counter wrap of a PWM slice producing a tone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct PwmTone {
    pub divider: u8,
    pub top: u16,
}

impl PwmTone {
    /// Compare value for a 50% duty square wave.
    #[inline]
    pub const fn half_duty(&self) -> u16 { ((self.top as u32 + 1) / 2) as u16 }
}

/// Smallest integer divider that keeps `top` within 16 bits.
///
/// Returns `None` for a zero frequency or one too low to reach with an 8-bit
/// divider.
pub fn tone_pwm_params(
    sys_clk_hz: u32,
    freq_hz: u32,
) -> Option<PwmTone> {
    if freq_hz == 0 {
        return None;
    }
    let period = sys_clk_hz / freq_hz;
    if period == 0 {
        return None;
    }

    let divider = period.div_ceil(1 << 16).max(1);
    let divider = u8::try_from(divider).ok()?;
    let top = u16::try_from(period / u32::from(divider) - 1).ok()?;
    Some(PwmTone { divider, top })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SYS_CLK: u32 = 125_000_000;

    #[test]
    fn test_melody_notes() {
        let freqs: [u32; 6] = STARTUP_MELODY.map(|t| t.freq_hz);
        assert_eq!(freqs, [261, 293, 329, 392, 329, 261]);
        assert!(STARTUP_MELODY.iter().all(|t| t.duration_ms == 200));
        assert_eq!(ALERT, Tone::new(392, 200));
    }

    #[test]
    fn test_pwm_params_c4() {
        let pwm = tone_pwm_params(SYS_CLK, 261).unwrap();
        assert_eq!(pwm, PwmTone { divider: 8, top: 59_864 });
        assert_eq!(pwm.half_duty(), 29_932);
    }

    #[test]
    fn test_pwm_params_high_tone_undivided() {
        let pwm = tone_pwm_params(SYS_CLK, 4_000).unwrap();
        assert_eq!(pwm.divider, 1);
        assert_eq!(pwm.top, 31_249);
    }

    #[test]
    fn test_pwm_params_frequency_accuracy() {
        for tone in STARTUP_MELODY.iter().chain([&ALERT]) {
            let pwm = tone_pwm_params(SYS_CLK, tone.freq_hz).unwrap();
            let actual = SYS_CLK as f32 / (f32::from(pwm.divider) * (f32::from(pwm.top) + 1.0));
            assert!((actual - tone.freq_hz as f32).abs() < 0.5, "{} Hz -> {actual}", tone.freq_hz);
        }
    }

    #[test]
    fn test_pwm_params_out_of_range() {
        assert_eq!(tone_pwm_params(SYS_CLK, 0), None);
        // Needs a divider above 255
        assert_eq!(tone_pwm_params(SYS_CLK, 5), None);
    }
}
