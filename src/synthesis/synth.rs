//! Additive chord synthesis: decaying sines, summed, normalized, quantized.

use tracing::debug;

use super::buffer::AudioBuffer;
use super::decay::DecayEnvelope;
use super::sine::SineOscillator;
use super::voicing::{ToneEvent, voice_chord};
use crate::error::{Error, Result};
use crate::music::{PitchClass, validate_octave};
use crate::signal::{Signal, SignalExt};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Decay constant `k` of each tone's `e^(-k·t)` envelope, per second.
pub const DECAY_RATE: f64 = 2.0;

/// Peak level of the normalized mix, as a fraction of full scale.
pub const PEAK_LEVEL: f64 = 0.9;

/// Added to the measured peak before dividing, so a silent mix stays silent.
pub const NORMALIZE_EPSILON: f64 = 1e-9;

/// Largest positive 16-bit sample value.
pub const FULL_SCALE: f64 = 32767.0;

/// Synthesizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthConfig {
    pub sample_rate: u32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Renders chord tones to 16-bit PCM.
///
/// Holds no state between calls; one value can serve any number of requests.
///
/// # Examples
///
/// ```
/// use sonarclave::{PitchClass, SynthConfig, Synthesizer};
///
/// let synth = Synthesizer::new(SynthConfig { sample_rate: 8000 }).unwrap();
/// let buffer = synth
///     .render(&[PitchClass::C, PitchClass::E, PitchClass::G], 4, 0.5)
///     .unwrap();
/// assert_eq!(buffer.len(), 4000);
/// assert_eq!(buffer.peak(), 29490);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    config: SynthConfig,
}

impl Synthesizer {
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampleRate`] for a zero sample rate.
    pub fn new(config: SynthConfig) -> Result<Self> {
        if config.sample_rate == 0 {
            return Err(Error::InvalidSampleRate(config.sample_rate));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> SynthConfig {
        self.config
    }

    /// Number of samples covering `[0, duration_secs)`.
    ///
    /// Zero for non-positive or non-finite durations.
    pub fn sample_count(&self, duration_secs: f64) -> usize {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return 0;
        }
        (f64::from(self.config.sample_rate) * duration_secs).round() as usize
    }

    /// Sums one decaying sine per tone into a floating-point mix.
    pub fn mix(&self, events: &[ToneEvent], sample_count: usize) -> Vec<f64> {
        let sample_rate = self.config.sample_rate;
        let mut mix = vec![0.0; sample_count];
        for event in events {
            let mut voice = SineOscillator::new(event.frequency.as_f64(), sample_rate)
                .multiply(DecayEnvelope::new(DECAY_RATE, sample_rate));
            voice.accumulate(&mut mix);
        }
        mix
    }

    /// Renders `tones` voiced around `base_octave` for `duration_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOctave`] when `base_octave` is outside -1 to 9.
    pub fn render(
        &self,
        tones: &[PitchClass],
        base_octave: i32,
        duration_secs: f64,
    ) -> Result<AudioBuffer> {
        validate_octave(base_octave)?;
        let events = voice_chord(tones, base_octave);
        let sample_count = self.sample_count(duration_secs);
        let mix = self.mix(&events, sample_count);
        let buffer = AudioBuffer::new(quantize(&normalize(&mix)), self.config.sample_rate);

        debug!(
            tones = ?events.iter().map(|e| format!("{}{}", e.pitch, e.octave)).collect::<Vec<_>>(),
            frequencies = ?events.iter().map(|e| e.frequency.as_f64()).collect::<Vec<_>>(),
            samples = buffer.len(),
            peak = buffer.peak(),
            "synthesized chord"
        );
        Ok(buffer)
    }

    /// Renders `tones` and encodes the result as WAV bytes.
    pub fn render_wav(
        &self,
        tones: &[PitchClass],
        base_octave: i32,
        duration_secs: f64,
    ) -> Result<Vec<u8>> {
        self.render(tones, base_octave, duration_secs)?.to_wav_bytes()
    }
}

/// Scales `signal` so its largest magnitude becomes [`PEAK_LEVEL`].
///
/// An all-zero signal stays all-zero.
pub fn normalize(signal: &[f64]) -> Vec<f64> {
    let peak = signal.iter().fold(0.0_f64, |peak, s| peak.max(s.abs()));
    let scale = PEAK_LEVEL / (peak + NORMALIZE_EPSILON);
    signal.iter().map(|s| s * scale).collect()
}

/// Converts samples in `[-1, 1]` to 16-bit PCM, rounding and clamping to range.
pub fn quantize(signal: &[f64]) -> Vec<i16> {
    signal
        .iter()
        .map(|s| {
            (s * FULL_SCALE)
                .round()
                .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
        })
        .collect()
}

/// Renders `tones` at `sample_rate` Hz.
///
/// # Errors
///
/// Returns [`Error::InvalidSampleRate`] for a zero sample rate and
/// [`Error::InvalidOctave`] for a base octave outside -1 to 9.
pub fn synthesize(
    tones: &[PitchClass],
    base_octave: i32,
    duration_secs: f64,
    sample_rate: u32,
) -> Result<AudioBuffer> {
    let synth = Synthesizer::new(SynthConfig { sample_rate })?;
    synth.render(tones, base_octave, duration_secs)
}
