//! Exponential decay envelope.

use crate::Signal;

/// Amplitude envelope `e^(-rate·t)`, starting at 1.0 and falling toward zero.
///
/// Evaluated from a sample counter rather than by repeated multiplication so the
/// level at sample `n` does not drift over long buffers.
///
/// # Examples
///
/// ```
/// use sonarclave::{DecayEnvelope, Signal};
///
/// let mut env = DecayEnvelope::new(2.0, 4);
/// assert_eq!(env.next_sample(), 1.0);
/// assert!((env.next_sample() - (-0.5_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DecayEnvelope {
    rate: f64,
    sample_period: f64,
    position: u64,
}

impl DecayEnvelope {
    /// Creates an envelope decaying at `rate` per second.
    pub fn new(rate: f64, sample_rate: u32) -> Self {
        Self {
            rate,
            sample_period: 1.0 / f64::from(sample_rate),
            position: 0,
        }
    }

    /// Level at `t` seconds after the start.
    pub fn level_at(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl Signal for DecayEnvelope {
    fn next_sample(&mut self) -> f64 {
        let t = self.position as f64 * self.sample_period;
        self.position += 1;
        self.level_at(t)
    }
}
