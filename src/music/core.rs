use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Reference tuning: A4 = 440 Hz (MIDI note 69).
pub const A4_FREQUENCY: f64 = 440.0;

/// MIDI note number of A4.
pub const A4_MIDI: i32 = 69;

/// Pitch classes of the chromatic scale.
///
/// Each variant represents one of the 12 notes in Western equal temperament,
/// independent of octave. Sharp spelling is canonical (`C#`, not `Db`); the
/// ordering is cyclic mod 12.
///
/// # Examples
///
/// ```
/// use sonarclave::PitchClass;
///
/// assert_eq!(PitchClass::A.index(), 9);
/// assert_eq!(PitchClass::from_index(13), PitchClass::CSharp);
/// assert_eq!("d#".parse::<PitchClass>().unwrap(), PitchClass::DSharp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in ascending order starting from C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Returns the semitone offset from C (0-11).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the pitch class for an index, wrapping mod 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Canonical (sharp) name, e.g. `"C#"`.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// True for the five pitch classes played on black keys.
    pub fn is_sharp(self) -> bool {
        matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }

    /// Moves up by `semitones`, wrapping around the 12-name cycle.
    ///
    /// ```
    /// use sonarclave::PitchClass;
    ///
    /// assert_eq!(PitchClass::A.transpose(4), PitchClass::CSharp);
    /// assert_eq!(PitchClass::C.transpose(-1), PitchClass::B);
    /// ```
    pub fn transpose(self, semitones: i32) -> Self {
        let index = (i32::from(self.index()) + semitones).rem_euclid(12);
        Self::from_index(index as usize)
    }

    /// MIDI note number of this pitch class in `octave` (C4 = 60, A4 = 69).
    ///
    /// Not clamped to 0-127; low octaves simply go negative. Saturates at the `i32`
    /// bounds instead of overflowing.
    pub fn midi_note(self, octave: i32) -> i32 {
        i32::from(self.index()).saturating_add(octave.saturating_add(1).saturating_mul(12))
    }

    /// Equal-tempered frequency in Hz of this pitch class in `octave`.
    ///
    /// Equivalent to `440 * 2^((midi - 69) / 12)`. The octave term is applied as an
    /// exact power of two, so raising the octave by one doubles the result bit-for-bit.
    ///
    /// ```
    /// use sonarclave::PitchClass;
    ///
    /// assert_eq!(PitchClass::A.frequency(4), 440.0);
    /// assert_eq!(PitchClass::A.frequency(3), 220.0);
    /// assert!((PitchClass::C.frequency(4) - 261.63).abs() < 0.01);
    /// ```
    pub fn frequency(self, octave: i32) -> f64 {
        let semitones_from_a = f64::from(i32::from(self.index()) - 9);
        A4_FREQUENCY
            * 2.0_f64.powi(octave.saturating_sub(4))
            * 2.0_f64.powf(semitones_from_a / 12.0)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    /// Parses a pitch class name, case-insensitively.
    ///
    /// Sharp names match the canonical table; flat spellings (`Db`, `Bb`, ...) are
    /// accepted and mapped to their sharp equivalents.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" | "B#" => Ok(PitchClass::C),
            "C#" | "DB" => Ok(PitchClass::CSharp),
            "D" => Ok(PitchClass::D),
            "D#" | "EB" => Ok(PitchClass::DSharp),
            "E" | "FB" => Ok(PitchClass::E),
            "F" | "E#" => Ok(PitchClass::F),
            "F#" | "GB" => Ok(PitchClass::FSharp),
            "G" => Ok(PitchClass::G),
            "G#" | "AB" => Ok(PitchClass::GSharp),
            "A" => Ok(PitchClass::A),
            "A#" | "BB" => Ok(PitchClass::ASharp),
            "B" | "CB" => Ok(PitchClass::B),
            _ => Err(Error::InvalidPitchClass(s.to_string())),
        }
    }
}

/// Frequency in Hz of `pitch` in `octave`.
pub fn frequency_of(pitch: PitchClass, octave: i32) -> f64 {
    pitch.frequency(octave)
}

/// Frequency in Hz of a pitch class given by name.
///
/// # Errors
///
/// Returns [`Error::InvalidPitchClass`] if `name` is not a pitch class.
///
/// ```
/// use sonarclave::frequency_of_name;
///
/// assert_eq!(frequency_of_name("A", 4).unwrap(), 440.0);
/// assert!(frequency_of_name("H", 4).is_err());
/// ```
pub fn frequency_of_name(name: &str, octave: i32) -> Result<f64> {
    let pitch: PitchClass = name.parse()?;
    Ok(pitch.frequency(octave))
}

/// Checks that `octave` is addressable by MIDI (-1 to 9).
pub fn validate_octave(octave: i32) -> Result<i32> {
    if (-1..=9).contains(&octave) {
        Ok(octave)
    } else {
        Err(Error::InvalidOctave(octave))
    }
}
