//! Pitch classes and the equal-tempered frequency table

use crate::error::RenderError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// The 12 pitch classes of the chromatic scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

/// All pitch classes in chromatic order, C first
pub const PITCH_CLASSES: [PitchClass; 12] = [
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

impl PitchClass {
    /// Frequency of this pitch class in octave 4 (A4 = 440 Hz)
    pub fn base_frequency(&self) -> f64 {
        match self {
            PitchClass::C => 261.63,
            PitchClass::CSharp => 277.18,
            PitchClass::D => 293.66,
            PitchClass::DSharp => 311.13,
            PitchClass::E => 329.63,
            PitchClass::F => 349.23,
            PitchClass::FSharp => 369.99,
            PitchClass::G => 392.00,
            PitchClass::GSharp => 415.30,
            PitchClass::A => 440.00,
            PitchClass::ASharp => 466.16,
            PitchClass::B => 493.88,
        }
    }

    /// Conventional name ("C", "C#", ...)
    pub fn name(&self) -> &'static str {
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

    /// Frequency at the given octave (already clamped by the caller)
    pub fn frequency(&self, octave: i32) -> f64 {
        self.base_frequency() * 2f64.powi(octave - 4)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PitchClass {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(PitchClass::C),
            "C#" => Ok(PitchClass::CSharp),
            "D" => Ok(PitchClass::D),
            "D#" => Ok(PitchClass::DSharp),
            "E" => Ok(PitchClass::E),
            "F" => Ok(PitchClass::F),
            "F#" => Ok(PitchClass::FSharp),
            "G" => Ok(PitchClass::G),
            "G#" => Ok(PitchClass::GSharp),
            "A" => Ok(PitchClass::A),
            "A#" => Ok(PitchClass::ASharp),
            "B" => Ok(PitchClass::B),
            other => Err(RenderError::InvalidNote {
                pitch: other.to_string(),
            }),
        }
    }
}

static NOTE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_name_regex() -> &'static Regex {
    NOTE_NAME_REGEX.get_or_init(|| {
        Regex::new(r"^([A-G]#?)(-?\d+)$").expect("invalid note name pattern")
    })
}

/// Parse a note name like "C#4" or "A-1" into pitch class and octave
pub fn parse_note_name(name: &str) -> Result<(PitchClass, i32), RenderError> {
    let caps = note_name_regex()
        .captures(name)
        .ok_or_else(|| RenderError::InvalidNoteName {
            name: name.to_string(),
        })?;

    let pitch: PitchClass = caps[1].parse()?;
    let octave: i32 = caps[2]
        .parse()
        .map_err(|_| RenderError::InvalidNoteName {
            name: name.to_string(),
        })?;

    Ok((pitch, octave))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_frequencies() {
        assert_eq!(PitchClass::A.base_frequency(), 440.00);
        assert_eq!(PitchClass::C.base_frequency(), 261.63);
        assert_eq!(PitchClass::B.base_frequency(), 493.88);
    }

    #[test]
    fn test_octave_doubling() {
        // Each octave doubles the frequency
        assert_eq!(PitchClass::A.frequency(5), 880.0);
        assert_eq!(PitchClass::A.frequency(3), 220.0);
        assert_eq!(PitchClass::A.frequency(4), 440.0);
    }

    #[test]
    fn test_pitch_class_from_str() {
        assert_eq!("C".parse::<PitchClass>().unwrap(), PitchClass::C);
        assert_eq!("F#".parse::<PitchClass>().unwrap(), PitchClass::FSharp);

        let err = "H".parse::<PitchClass>().unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidNote {
                pitch: "H".to_string()
            }
        );
    }

    #[test]
    fn test_parse_note_name() {
        assert_eq!(parse_note_name("C4").unwrap(), (PitchClass::C, 4));
        assert_eq!(parse_note_name("C#4").unwrap(), (PitchClass::CSharp, 4));
        assert_eq!(parse_note_name("A-1").unwrap(), (PitchClass::A, -1));
        assert_eq!(parse_note_name("G#10").unwrap(), (PitchClass::GSharp, 10));
    }

    #[test]
    fn test_parse_note_name_rejects_garbage() {
        for name in ["", "4", "C", "H4", "C##4", "c4", "C 4", "C#"] {
            let err = parse_note_name(name).unwrap_err();
            assert_eq!(
                err,
                RenderError::InvalidNoteName {
                    name: name.to_string()
                },
                "expected rejection for {:?}",
                name
            );
        }
    }

    #[test]
    fn test_pitch_classes_ordered() {
        assert_eq!(PITCH_CLASSES.len(), 12);
        assert_eq!(PITCH_CLASSES[0], PitchClass::C);
        assert_eq!(PITCH_CLASSES[9], PitchClass::A);

        // The table rises monotonically across the octave
        for pair in PITCH_CLASSES.windows(2) {
            assert!(pair[0].base_frequency() < pair[1].base_frequency());
        }
    }

    #[test]
    fn test_display_round_trip() {
        for pitch in PITCH_CLASSES {
            assert_eq!(pitch.name().parse::<PitchClass>().unwrap(), pitch);
        }
    }
}
