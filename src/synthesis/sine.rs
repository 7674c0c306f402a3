//! Sine wave oscillator implementation.

use crate::Signal;
use std::f64::consts::PI;

/// A sine wave oscillator starting at phase zero.
///
/// Maintains phase continuity across calls to `next_sample()`, so sample `n`
/// is `sin(2π·f·n / sample_rate)`.
#[derive(Debug, Clone)]
pub struct SineOscillator {
    /// Current phase of the oscillator (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
}

impl SineOscillator {
    /// Creates a new sine oscillator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sonarclave::{Signal, SineOscillator};
    ///
    /// let mut osc = SineOscillator::new(440.0, 44100);
    /// assert_eq!(osc.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64, sample_rate: u32) -> Self {
        Self {
            phase: 0.0,
            phase_increment: frequency / f64::from(sample_rate),
        }
    }

    pub fn frequency(&self, sample_rate: u32) -> f64 {
        self.phase_increment * f64::from(sample_rate)
    }
}

impl Signal for SineOscillator {
    fn next_sample(&mut self) -> f64 {
        let sample = (self.phase * 2.0 * PI).sin();

        // Increment phase and wrap to [0.0, 1.0)
        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= self.phase.floor();
        }

        sample
    }
}
