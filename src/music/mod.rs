//! Music theory: pitch classes, equal-tempered tuning, and triad construction.
//!
//! All tables here are constants; nothing in this module holds state, so every
//! function is safe to call from any thread.

pub mod chord;
pub mod core;
pub mod frequency;

pub use chord::{Chord, ChordQuality, build_chord, build_chord_by_name};
pub use self::core::{PitchClass, frequency_of, frequency_of_name, validate_octave};
pub use frequency::Frequency;
