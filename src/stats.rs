//! Running averages since boot.
//!
//! Sums are kept in `f64` while the inputs are `f32`: every `f32` is exact in
//! `f64`, so a constant input averages back to itself for any realistic
//! number of samples.

use crate::sampler::Measurements;

/// Means of all four measurements and the time since the accumulator started.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Summary {
    pub means: Measurements,
    pub elapsed_ms: u64,
}

impl Summary {
    /// Elapsed time in seconds, as shown on the summary view.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 { self.elapsed_ms as f32 / 1000.0 }
}

/// Sample count and per-channel sums. Never reset while running.
#[derive(Clone, Copy, Debug)]
pub struct Accumulator {
    start_ms: u64,
    sample_count: u64,
    sums: [f64; 4],
}

impl Accumulator {
    pub const fn new(start_ms: u64) -> Self {
        Self {
            start_ms,
            sample_count: 0,
            sums: [0.0; 4],
        }
    }

    pub fn update(
        &mut self,
        measurements: &Measurements,
    ) {
        self.sample_count += 1;
        for (sum, value) in self.sums.iter_mut().zip(measurements.to_array()) {
            *sum += f64::from(value);
        }
    }

    #[inline]
    pub const fn sample_count(&self) -> u64 { self.sample_count }

    /// Means and elapsed time at `now_ms`, `None` before the first update.
    pub fn snapshot(
        &self,
        now_ms: u64,
    ) -> Option<Summary> {
        if self.sample_count == 0 {
            return None;
        }
        let count = self.sample_count as f64;
        let means = self.sums.map(|sum| (sum / count) as f32);
        Some(Summary {
            means: Measurements::from_array(means),
            elapsed_ms: now_ms.saturating_sub(self.start_ms),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_snapshot() {
        let acc = Accumulator::new(0);
        assert_eq!(acc.snapshot(1_000), None);
    }

    #[test]
    fn test_constant_mean_exact() {
        let value = Measurements::from_array([3.3, 12.7, 61.9, 333.3]);
        let mut acc = Accumulator::new(0);
        for _ in 0..10_000 {
            acc.update(&value);
        }
        let summary = acc.snapshot(0).unwrap();
        assert_eq!(acc.sample_count(), 10_000);
        assert_eq!(summary.means, value);
    }

    #[test]
    fn test_mean_of_ramp() {
        let mut acc = Accumulator::new(0);
        for i in 0..=10 {
            acc.update(&Measurements::from_array([i as f32, 0.0, 100.0, 0.0]));
        }
        let means = acc.snapshot(0).unwrap().means;
        assert_eq!(means.gas, 5.0);
        assert_eq!(means.humidity, 100.0);
    }

    #[test]
    fn test_elapsed_from_start() {
        let mut acc = Accumulator::new(2_500);
        acc.update(&Measurements::default());
        let summary = acc.snapshot(14_000).unwrap();
        assert_eq!(summary.elapsed_ms, 11_500);
        assert_eq!(summary.elapsed_secs(), 11.5);
        // Clock before start
        assert_eq!(acc.snapshot(0).unwrap().elapsed_ms, 0);
    }
}
