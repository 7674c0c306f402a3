//! Audio synthesis for chord previews.
//!
//! This module turns an ordered set of chord tones into a playable buffer:
//! - Voicing (which octave each tone sounds in)
//! - A decaying sine per tone, summed into one mix
//! - Peak normalization and 16-bit quantization
//! - WAV container encoding

mod buffer;
mod decay;
mod sine;
pub mod synth;
mod voicing;

pub use buffer::AudioBuffer;
pub use decay::DecayEnvelope;
pub use sine::SineOscillator;
pub use synth::{
    DECAY_RATE, DEFAULT_SAMPLE_RATE, FULL_SCALE, NORMALIZE_EPSILON, PEAK_LEVEL, SynthConfig,
    Synthesizer, normalize, quantize, synthesize,
};
pub use voicing::{ToneEvent, voice_chord};
