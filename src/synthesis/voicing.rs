//! Octave placement of chord tones.

use crate::music::{Frequency, PitchClass};

/// A pitch class placed in a concrete octave, ready to be rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEvent {
    pub pitch: PitchClass,
    pub octave: i32,
    pub frequency: Frequency,
}

impl ToneEvent {
    pub fn new(pitch: PitchClass, octave: i32) -> Self {
        Self {
            pitch,
            octave,
            frequency: Frequency::from_pitch(pitch, octave),
        }
    }
}

/// Places each chord tone in an octave.
///
/// The first two tones (root and third) sit in `base_octave`; every later tone drops
/// one octave below it.
///
/// ```
/// use sonarclave::{PitchClass, voice_chord};
///
/// let events = voice_chord(&[PitchClass::C, PitchClass::E, PitchClass::G], 4);
/// let octaves: Vec<i32> = events.iter().map(|e| e.octave).collect();
/// assert_eq!(octaves, vec![4, 4, 3]);
/// ```
pub fn voice_chord(tones: &[PitchClass], base_octave: i32) -> Vec<ToneEvent> {
    tones
        .iter()
        .enumerate()
        .map(|(i, &pitch)| {
            let octave = if i <= 1 { base_octave } else { base_octave.saturating_sub(1) };
            ToneEvent::new(pitch, octave)
        })
        .collect()
}
