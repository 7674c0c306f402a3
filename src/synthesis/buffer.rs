//! 16-bit PCM sample buffers and their WAV container encoding.

use std::io::Cursor;
use std::path::Path;

use crate::error::Result;

/// A mono buffer of 16-bit signed PCM samples at a fixed sample rate.
///
/// Produced fresh by each synthesis call and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioBuffer {
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Largest absolute sample value (0 for an empty or silent buffer).
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    fn wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        }
    }

    /// Encodes the samples as a mono, 16-bit WAV file held in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sonarclave::AudioBuffer;
    ///
    /// let buffer = AudioBuffer::new(vec![0, 1000, -1000], 8000);
    /// let bytes = buffer.to_wav_bytes().unwrap();
    /// assert_eq!(&bytes[0..4], b"RIFF");
    /// assert_eq!(&bytes[8..12], b"WAVE");
    /// ```
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::with_capacity(44 + self.samples.len() * 2));
        {
            let mut writer = hound::WavWriter::new(&mut cursor, self.wav_spec())?;
            for &sample in &self.samples {
                writer.write_sample(sample)?;
            }
            writer.finalize()?;
        }
        Ok(cursor.into_inner())
    }

    /// Writes the samples to a WAV file on disk.
    pub fn write_wav(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = hound::WavWriter::create(path, self.wav_spec())?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak() {
        let buffer = AudioBuffer::new(vec![3, -32768, 100], 44100);
        assert_eq!(buffer.peak(), 32768);
        assert_eq!(AudioBuffer::new(Vec::new(), 44100).peak(), 0);
    }

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::new(vec![0; 22050], 44100);
        assert!((buffer.duration_secs() - 0.5).abs() < 1e-12);
        assert_eq!(buffer.len(), 22050);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_wav_header_and_samples() {
        let buffer = AudioBuffer::new(vec![0, 29490, -29490, 7], 22050);
        let bytes = buffer.to_wav_bytes().unwrap();

        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, buffer.samples());
    }

    #[test]
    fn test_write_wav_matches_in_memory_bytes() {
        let buffer = AudioBuffer::new(vec![0, 1200, -1200, 29490], 8000);
        let path = std::env::temp_dir().join(format!("sonarclave-{}.wav", std::process::id()));

        buffer.write_wav(&path).unwrap();
        let on_disk = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(on_disk, buffer.to_wav_bytes().unwrap());
    }

    #[test]
    fn test_empty_wav_is_valid() {
        let bytes = AudioBuffer::new(Vec::new(), 44100).to_wav_bytes().unwrap();
        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.len(), 0);
    }
}
