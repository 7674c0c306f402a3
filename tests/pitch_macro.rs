#![cfg(feature = "macros")]

use sonarclave::{PitchClass, build_chord, pitch};

#[test]
fn test_pitch_macro_naturals() {
    assert_eq!(pitch!("C"), PitchClass::C);
    assert_eq!(pitch!("A"), PitchClass::A);
}

#[test]
fn test_pitch_macro_sharps() {
    assert_eq!(pitch!("C#"), PitchClass::CSharp);
    assert_eq!(pitch!("g#"), PitchClass::GSharp);
}

#[test]
fn test_pitch_macro_flats() {
    assert_eq!(pitch!("Bb"), PitchClass::ASharp);
    assert_eq!(pitch!("Db"), pitch!("C#"));
}

#[test]
fn test_pitch_macro_in_chord() {
    let chord = build_chord(pitch!("A"), "mayor");
    assert_eq!(chord.tones(), &[pitch!("A"), pitch!("C#"), pitch!("E")]);
}
