//! Error types for sonarclave.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A note name that is not one of the 12 pitch classes
    #[error("invalid pitch class: '{0}'")]
    InvalidPitchClass(String),
    /// A chord quality with no formula (only raised by the strict parser)
    #[error("unknown chord quality: '{0}'")]
    UnknownChordQuality(String),
    #[error("octave {0} out of range (-1 to 9)")]
    InvalidOctave(i32),
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
    #[cfg(feature = "diagram")]
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
