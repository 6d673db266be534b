//! Notes, pitch classes, and score files

mod event;
mod pitch;
mod score;

pub use event::{flatten_tracks, SynthNote, Track, TrackNote};
pub use pitch::{parse_note_name, PitchClass, PITCH_CLASSES};
pub use score::{load_score, Score, ScoreNote};
