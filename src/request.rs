//! The request object a caller (web page, CLI, API handler) hands in, and the
//! preview it gets back.

use std::ops::RangeInclusive;

use tracing::{info, warn};

use crate::error::Result;
use crate::music::{Chord, ChordQuality, PitchClass, validate_octave};
use crate::synthesis::{AudioBuffer, DEFAULT_SAMPLE_RATE, SynthConfig, Synthesizer};

/// Base octaves offered to users.
pub const OCTAVE_RANGE: RangeInclusive<i32> = 2..=5;

/// Preview durations offered to users, in seconds.
pub const DURATION_RANGE: RangeInclusive<f64> = 1.0..=5.0;

pub const DEFAULT_OCTAVE: i32 = 4;
pub const DEFAULT_DURATION_SECS: f64 = 2.0;

/// Everything needed to render one chord preview.
///
/// # Examples
///
/// ```
/// use sonarclave::ChordRequest;
///
/// let request = ChordRequest {
///     root: "A".into(),
///     quality: "menor".into(),
///     duration_secs: 1.0,
///     sample_rate: 8000,
///     ..ChordRequest::default()
/// };
/// let preview = request.render().unwrap();
/// assert_eq!(preview.chord.to_string(), "A — C — E");
/// assert_eq!(preview.audio.len(), 8000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChordRequest {
    pub root: String,
    pub quality: String,
    pub octave: i32,
    pub duration_secs: f64,
    pub sample_rate: u32,
    /// Reject unknown qualities instead of substituting major
    pub strict: bool,
}

impl Default for ChordRequest {
    fn default() -> Self {
        Self {
            root: PitchClass::C.name().to_string(),
            quality: ChordQuality::Major.name().to_string(),
            octave: DEFAULT_OCTAVE,
            duration_secs: DEFAULT_DURATION_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            strict: false,
        }
    }
}

/// The outputs of one request.
#[derive(Debug, Clone)]
pub struct ChordPreview {
    pub chord: Chord,
    pub audio: AudioBuffer,
    /// WAV container bytes of `audio`
    pub wav: Vec<u8>,
    /// PNG keyboard diagram
    #[cfg(feature = "diagram")]
    pub diagram_png: Vec<u8>,
}

impl ChordRequest {
    /// Resolves the root and quality into a chord.
    ///
    /// # Errors
    ///
    /// Fails on an unknown root name, and on an unknown quality when `strict` is set.
    pub fn chord(&self) -> Result<Chord> {
        let root: PitchClass = self.root.parse()?;
        let quality = if self.strict {
            self.quality.parse()?
        } else {
            ChordQuality::from_name_or_major(&self.quality)
        };
        Ok(Chord::new(root, quality))
    }

    /// Validates the request and renders audio (and the diagram, when enabled).
    ///
    /// Octaves and durations outside the recommended ranges are logged but still
    /// rendered; octaves outside MIDI range are rejected.
    pub fn render(&self) -> Result<ChordPreview> {
        let chord = self.chord()?;
        validate_octave(self.octave)?;
        self.warn_out_of_range();

        let synth = Synthesizer::new(SynthConfig {
            sample_rate: self.sample_rate,
        })?;
        let audio = synth.render(chord.tones(), self.octave, self.duration_secs)?;
        let wav = audio.to_wav_bytes()?;

        #[cfg(feature = "diagram")]
        let diagram_png = crate::diagram::KeyboardDiagram::default().render_png(chord.tones())?;

        info!(
            chord = %chord.label(),
            notes = %chord,
            octave = self.octave,
            duration_secs = self.duration_secs,
            wav_bytes = wav.len(),
            "rendered chord preview"
        );

        Ok(ChordPreview {
            chord,
            audio,
            wav,
            #[cfg(feature = "diagram")]
            diagram_png,
        })
    }

    fn warn_out_of_range(&self) {
        if !OCTAVE_RANGE.contains(&self.octave) {
            warn!(
                octave = self.octave,
                "octave outside recommended range {:?}", OCTAVE_RANGE
            );
        }
        if !DURATION_RANGE.contains(&self.duration_secs) {
            warn!(
                duration_secs = self.duration_secs,
                "duration outside recommended range {:?}", DURATION_RANGE
            );
        }
    }
}
