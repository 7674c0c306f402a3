//! Core signal trait and the combinator used to shape voices.
//!
//! Everything that produces samples (oscillators, envelopes, products of the two)
//! implements [`Signal`]. Sample rate is a runtime value here because callers pick it
//! per request.

/// Common interface for all signal sources and processors.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Adds the next `buffer.len()` samples onto whatever the buffer already holds.
    ///
    /// Used to sum several voices into one mix without a scratch buffer.
    fn accumulate(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample += self.next_sample();
        }
    }
}

/// Multiplies two signals together (ring modulation / amplitude shaping).
///
/// # Examples
///
/// ```
/// use sonarclave::{DecayEnvelope, Multiply, Signal, SineOscillator};
///
/// let osc = SineOscillator::new(440.0, 44100);
/// let env = DecayEnvelope::new(2.0, 44100);
/// let mut voice = Multiply::new(osc, env);
/// assert_eq!(voice.next_sample(), 0.0);
/// ```
pub struct Multiply<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Multiply<A, B> {
    /// Creates a new Multiply combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Multiply<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() * self.b.next_sample()
    }
}

/// Extension methods for composing signals.
pub trait SignalExt: Signal + Sized {
    /// Multiplies this signal by another signal.
    fn multiply<S: Signal>(self, other: S) -> Multiply<Self, S> {
        Multiply::new(self, other)
    }
}

impl<T: Signal> SignalExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl Signal for Constant {
        fn next_sample(&mut self) -> f64 {
            self.0
        }
    }

    struct Ramp(f64);

    impl Signal for Ramp {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_multiply() {
        let mut product = Constant(0.5).multiply(Ramp(0.0));
        assert_eq!(product.next_sample(), 0.5);
        assert_eq!(product.next_sample(), 1.0);
    }

    #[test]
    fn test_process_fills_buffer() {
        let mut buffer = vec![0.0; 4];
        Ramp(0.0).process(&mut buffer);
        assert_eq!(buffer, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_accumulate_adds() {
        let mut buffer = vec![1.0; 3];
        Constant(0.25).accumulate(&mut buffer);
        Constant(0.25).accumulate(&mut buffer);
        assert_eq!(buffer, vec![1.5, 1.5, 1.5]);
    }
}
