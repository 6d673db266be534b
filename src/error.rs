//! Error types for the rendering pipeline

use thiserror::Error;

/// Errors raised while rendering notes into audio
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A pitch class outside the 12 known names reached the engine
    #[error("invalid note: unknown pitch class '{pitch}'")]
    InvalidNote { pitch: String },

    /// A note name from the upstream parser that does not match
    /// `<PitchClass><Octave>` (e.g. "C#4")
    #[error("invalid note name '{name}': expected pitch class A-G with optional '#' followed by an octave")]
    InvalidNoteName { name: String },

    /// An instrument name with no registered profile
    #[error("invalid sound: no instrument named '{name}'")]
    InvalidSound { name: String },

    /// An instrument index past the end of the registry
    #[error("invalid sound: no instrument at index {index}")]
    InvalidSoundIndex { index: usize },

    /// A profile registration that collides with an existing name
    #[error("duplicate sound: instrument '{name}' is already registered")]
    DuplicateSound { name: String },

    /// A buffer that does not carry the expected WAV layout
    #[error("malformed container: {reason}")]
    MalformedContainer { reason: String },
}
