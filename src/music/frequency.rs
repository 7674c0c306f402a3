//! Frequency type for representing pitch in Hz.

use super::core::{A4_FREQUENCY, A4_MIDI, PitchClass};

/// A frequency value in Hz.
///
/// Accepts frequencies directly in Hz, MIDI note numbers, or a pitch class
/// placed in an octave.
///
/// # Examples
///
/// ```
/// use sonarclave::{Frequency, PitchClass};
///
/// let freq: Frequency = 440.0.into();
/// assert_eq!(freq.as_f64(), 440.0);
///
/// let freq = Frequency::from_midi(69);
/// assert_eq!(freq.as_f64(), 440.0);
///
/// let freq = Frequency::from_pitch(PitchClass::A, 4);
/// assert_eq!(freq, Frequency::from_hz(440.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a new frequency from Hz.
    pub fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Creates a new frequency from a MIDI note number.
    ///
    /// Uses `f = 440 * 2^((n - 69) / 12)`. Negative note numbers are allowed.
    pub fn from_midi(midi_note: i32) -> Self {
        let hz = A4_FREQUENCY * 2.0_f64.powf(f64::from(midi_note - A4_MIDI) / 12.0);
        Frequency(hz)
    }

    /// Creates a frequency from a pitch class in a given octave.
    pub fn from_pitch(pitch: PitchClass, octave: i32) -> Self {
        Frequency(pitch.frequency(octave))
    }

    /// Returns the frequency value in Hz.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

impl From<Frequency> for f64 {
    fn from(freq: Frequency) -> Self {
        freq.0
    }
}
