//! Chord qualities, their semitone formulas, and chord-tone derivation.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use super::core::PitchClass;
use crate::error::{Error, Result};

/// Major triad: root, major third, perfect fifth.
pub const MAJOR_FORMULA: [u8; 3] = [0, 4, 7];

/// Minor triad: root, minor third, perfect fifth.
pub const MINOR_FORMULA: [u8; 3] = [0, 3, 7];

/// The triad types a chord can be built from.
///
/// Canonical names are `"mayor"` and `"menor"`; the English `"major"` and
/// `"minor"` parse as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChordQuality {
    #[default]
    Major,
    Minor,
}

impl ChordQuality {
    /// All qualities, in the order they are offered to users.
    pub const ALL: [ChordQuality; 2] = [ChordQuality::Major, ChordQuality::Minor];

    /// Semitone offsets from the root, in voicing order.
    pub fn formula(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &MAJOR_FORMULA,
            ChordQuality::Minor => &MINOR_FORMULA,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "mayor",
            ChordQuality::Minor => "menor",
        }
    }

    /// Resolves a quality name, substituting major for anything unrecognized.
    ///
    /// The substitution is logged as a warning so that a misspelled quality does
    /// not pass unnoticed.
    pub fn from_name_or_major(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(quality = name, "unknown chord quality, falling back to major");
            ChordQuality::Major
        })
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordQuality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mayor" | "major" => Ok(ChordQuality::Major),
            "menor" | "minor" => Ok(ChordQuality::Minor),
            _ => Err(Error::UnknownChordQuality(s.to_string())),
        }
    }
}

/// A root pitch class plus a quality, with its derived tones.
///
/// Tones follow formula order, each computed as `(root + offset) mod 12`.
///
/// # Examples
///
/// ```
/// use sonarclave::{Chord, ChordQuality, PitchClass};
///
/// let chord = Chord::new(PitchClass::A, ChordQuality::Major);
/// assert_eq!(chord.tones(), &[PitchClass::A, PitchClass::CSharp, PitchClass::E]);
/// assert_eq!(chord.label(), "A mayor");
/// assert_eq!(chord.to_string(), "A — C# — E");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: PitchClass,
    quality: ChordQuality,
    tones: Vec<PitchClass>,
}

impl Chord {
    pub fn new(root: PitchClass, quality: ChordQuality) -> Self {
        let tones = quality
            .formula()
            .iter()
            .map(|&offset| PitchClass::from_index(root.index() as usize + offset as usize))
            .collect();
        Self {
            root,
            quality,
            tones,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Chord tones in formula order.
    pub fn tones(&self) -> &[PitchClass] {
        &self.tones
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.tones.contains(&pitch)
    }

    /// Human-readable title, e.g. `"C mayor"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.root, self.quality)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.tones.iter().map(|p| p.name()).collect();
        f.write_str(&names.join(" — "))
    }
}

/// Builds a chord from a root and a quality name.
///
/// Unknown quality names fall back to major with a logged warning; use
/// [`ChordQuality::from_str`] first when unknown names should be rejected.
///
/// ```
/// use sonarclave::{build_chord, PitchClass};
///
/// let chord = build_chord(PitchClass::C, "menor");
/// assert_eq!(chord.tones(), &[PitchClass::C, PitchClass::DSharp, PitchClass::G]);
/// ```
pub fn build_chord(root: PitchClass, quality: &str) -> Chord {
    Chord::new(root, ChordQuality::from_name_or_major(quality))
}

/// Builds a chord from a root name and a quality name.
///
/// # Errors
///
/// Returns [`Error::InvalidPitchClass`] if `root` is not a pitch class name.
pub fn build_chord_by_name(root: &str, quality: &str) -> Result<Chord> {
    let root: PitchClass = root.parse()?;
    Ok(build_chord(root, quality))
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use PitchClass::*;

    /// Log sink shared between a test and the subscriber it installs.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` with a subscriber that writes plain-text events into the returned sink.
    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, logs.contents())
    }

    #[test]
    fn test_c_major_and_minor() {
        assert_eq!(build_chord(C, "mayor").tones(), &[C, E, G]);
        assert_eq!(build_chord(C, "menor").tones(), &[C, DSharp, G]);
    }

    #[test]
    fn test_wraps_around_cycle() {
        assert_eq!(build_chord(A, "mayor").tones(), &[A, CSharp, E]);
        assert_eq!(build_chord(B, "menor").tones(), &[B, D, FSharp]);
        assert_eq!(build_chord(GSharp, "mayor").tones(), &[GSharp, C, DSharp]);
    }

    #[test]
    fn test_every_root_keeps_formula_intervals() {
        for root in PitchClass::ALL {
            for quality in ChordQuality::ALL {
                let chord = Chord::new(root, quality);
                assert_eq!(chord.tones()[0], root);
                for (tone, offset) in chord.tones().iter().zip(quality.formula()) {
                    assert_eq!(*tone, root.transpose(i32::from(*offset)));
                }
            }
        }
    }

    #[test]
    fn test_unknown_quality_falls_back_to_major() {
        let chord = build_chord(D, "aumentado");
        assert_eq!(chord.quality(), ChordQuality::Major);
        assert_eq!(chord.tones(), &[D, FSharp, A]);
    }

    #[test]
    fn test_unknown_quality_logs_warning() {
        let (chord, logs) = capture_logs(|| build_chord(D, "aumentado"));
        assert_eq!(chord.quality(), ChordQuality::Major);
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("unknown chord quality"), "{logs}");
        assert!(logs.contains("aumentado"), "{logs}");

        let (_, logs) = capture_logs(|| build_chord(D, "menor"));
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn test_strict_quality_parse() {
        assert_eq!("mayor".parse::<ChordQuality>().unwrap(), ChordQuality::Major);
        assert_eq!("Minor".parse::<ChordQuality>().unwrap(), ChordQuality::Minor);
        assert!(matches!(
            "dim".parse::<ChordQuality>(),
            Err(Error::UnknownChordQuality(name)) if name == "dim"
        ));
    }

    #[test]
    fn test_build_by_name() {
        let chord = build_chord_by_name("Eb", "menor").unwrap();
        assert_eq!(chord.tones(), &[DSharp, FSharp, ASharp]);
        assert!(build_chord_by_name("H", "mayor").is_err());
    }

    #[test]
    fn test_label_and_display() {
        let chord = build_chord(FSharp, "menor");
        assert_eq!(chord.label(), "F# menor");
        assert_eq!(chord.to_string(), "F# — A — C#");
        assert!(chord.contains(A));
        assert!(!chord.contains(ASharp));
    }
}
