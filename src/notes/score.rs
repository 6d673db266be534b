//! Score files: a YAML note list the CLI renders
//!
//! A score is the on-disk stand-in for the upstream MIDI parser's
//! output and goes through the same flattening path.

use crate::notes::event::{Track, TrackNote};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A renderable score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    /// Instrument name (default: piano)
    #[serde(default = "default_instrument")]
    pub instrument: String,

    /// Notes in playback order
    pub notes: Vec<ScoreNote>,
}

fn default_instrument() -> String {
    "piano".to_string()
}

/// One note of a score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreNote {
    /// Note name, e.g. "C#4"
    pub note: String,

    /// Duration in seconds (default: 2.0)
    #[serde(default = "default_duration")]
    pub duration: f64,

    /// Start time in seconds (default: right after the previous note)
    pub start: Option<f64>,
}

fn default_duration() -> f64 {
    2.0
}

impl Score {
    /// Validate the score
    pub fn validate(&self) -> Result<()> {
        if self.instrument.is_empty() {
            bail!("Score instrument must not be empty");
        }
        if self.notes.is_empty() {
            bail!("Score must contain at least one note");
        }
        for note in &self.notes {
            if !note.duration.is_finite() {
                bail!("Note '{}' has a non-finite duration", note.note);
            }
            if let Some(start) = note.start {
                if !start.is_finite() || start < 0.0 {
                    bail!("Note '{}' has an invalid start time", note.note);
                }
            }
        }
        Ok(())
    }

    /// View the score as a single parsed track
    pub fn to_track(&self) -> Track {
        Track {
            notes: self
                .notes
                .iter()
                .map(|n| TrackNote {
                    name: n.note.clone(),
                    duration: n.duration,
                    start_time: n.start,
                })
                .collect(),
        }
    }
}

/// Load a score from a YAML file
pub fn load_score(path: &Path) -> Result<Score> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read score file: {:?}", path))?;
    let score: Score = serde_yaml::from_str(&contents)?;
    score.validate()?;
    Ok(score)
}
