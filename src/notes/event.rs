//! Note events produced by the upstream parser and consumed by the timeline

use crate::notes::pitch::{parse_note_name, PitchClass};

/// A note ready for synthesis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthNote {
    /// Pitch class of the note
    pub pitch_class: PitchClass,

    /// Octave (clamped to 1-8 by the engine)
    pub octave: i32,

    /// Duration in seconds
    pub duration: f64,

    /// Start time in seconds (None = the timeline cursor at encounter)
    pub start_time: Option<f64>,
}

impl SynthNote {
    /// Create a note with no explicit start time
    pub fn new(pitch_class: PitchClass, octave: i32, duration: f64) -> Self {
        Self {
            pitch_class,
            octave,
            duration,
            start_time: None,
        }
    }

    /// Place the note at an explicit start time
    pub fn at(mut self, start_time: f64) -> Self {
        self.start_time = Some(start_time);
        self
    }
}

/// A note as delivered by the upstream MIDI parser
#[derive(Debug, Clone, PartialEq)]
pub struct TrackNote {
    /// Note name, e.g. "C#4"
    pub name: String,

    /// Duration in seconds
    pub duration: f64,

    /// Start time in seconds, if the parser supplied one
    pub start_time: Option<f64>,
}

/// One track of parsed note events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub notes: Vec<TrackNote>,
}

/// Flatten parsed tracks into synthesizable notes.
///
/// Note names that do not parse are skipped with a warning; the rest of
/// the timeline is unaffected.
pub fn flatten_tracks(tracks: &[Track]) -> Vec<SynthNote> {
    let mut notes = Vec::new();

    for track in tracks {
        for note in &track.notes {
            match parse_note_name(&note.name) {
                Ok((pitch_class, octave)) => {
                    notes.push(SynthNote {
                        pitch_class,
                        octave,
                        duration: note.duration,
                        start_time: note.start_time,
                    });
                }
                Err(err) => {
                    tracing::warn!("skipping note: {}", err);
                }
            }
        }
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(names: &[&str]) -> Track {
        Track {
            notes: names
                .iter()
                .map(|name| TrackNote {
                    name: name.to_string(),
                    duration: 1.0,
                    start_time: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_flatten_single_track() {
        let tracks = vec![track(&["C4", "E4", "G4"])];
        let notes = flatten_tracks(&tracks);

        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].pitch_class, PitchClass::C);
        assert_eq!(notes[1].pitch_class, PitchClass::E);
        assert_eq!(notes[2].pitch_class, PitchClass::G);
        assert!(notes.iter().all(|n| n.octave == 4));
    }

    #[test]
    fn test_flatten_preserves_track_order() {
        let tracks = vec![track(&["C4"]), track(&["A3"])];
        let notes = flatten_tracks(&tracks);

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].pitch_class, PitchClass::C);
        assert_eq!(notes[1].pitch_class, PitchClass::A);
    }

    #[test]
    fn test_flatten_skips_malformed_names() {
        let tracks = vec![track(&["C4", "H4", "banana", "G#2"])];
        let notes = flatten_tracks(&tracks);

        // The two bad names drop out, the rest survive
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].pitch_class, PitchClass::C);
        assert_eq!(notes[1].pitch_class, PitchClass::GSharp);
        assert_eq!(notes[1].octave, 2);
    }

    #[test]
    fn test_flatten_carries_timing() {
        let tracks = vec![Track {
            notes: vec![TrackNote {
                name: "A4".to_string(),
                duration: 0.5,
                start_time: Some(2.0),
            }],
        }];
        let notes = flatten_tracks(&tracks);

        assert_eq!(notes[0].duration, 0.5);
        assert_eq!(notes[0].start_time, Some(2.0));
    }

    #[test]
    fn test_synth_note_builder() {
        let note = SynthNote::new(PitchClass::A, 4, 1.5).at(3.0);
        assert_eq!(note.start_time, Some(3.0));
        assert_eq!(note.duration, 1.5);
    }
}
