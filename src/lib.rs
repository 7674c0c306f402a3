//! SonarClave - a chord explorer for learning piano harmony.
//!
//! Pick a root note and a chord quality; this library derives the chord tones,
//! synthesizes a short decaying preview as a mono 16-bit WAV, and (with the
//! `diagram` feature) draws the chord on a one-octave keyboard.
//!
//! ```
//! use sonarclave::{build_chord, synthesize, PitchClass};
//!
//! let chord = build_chord(PitchClass::A, "mayor");
//! let audio = synthesize(chord.tones(), 4, 1.0, 44100).unwrap();
//! assert_eq!(audio.len(), 44100);
//! ```

#[cfg(feature = "diagram")]
pub mod diagram;
pub mod error;
pub mod music;
pub mod request;
pub mod signal;
pub mod synthesis;

// Re-export commonly used types at the crate root
#[cfg(feature = "diagram")]
pub use diagram::KeyboardDiagram;
pub use error::{Error, Result};
pub use music::{
    Chord, ChordQuality, Frequency, PitchClass, build_chord, build_chord_by_name, frequency_of,
    frequency_of_name,
};
pub use request::{ChordPreview, ChordRequest};
pub use signal::{Multiply, Signal, SignalExt};
pub use synthesis::{
    AudioBuffer, DecayEnvelope, SineOscillator, SynthConfig, Synthesizer, ToneEvent, synthesize,
    voice_chord,
};

#[cfg(feature = "macros")]
pub use sonarclave_macros::pitch;
