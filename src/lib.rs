//! Chime - additive note synthesis and score rendering
//!
//! Renders note lists into 16-bit mono PCM. Instrument profiles shape
//! each note, a cache keeps repeated notes cheap, and the timeline
//! assembler stitches notes and silence into one WAV buffer ready for
//! playback or an external encoder.

pub mod config;
pub mod encode;
pub mod error;
pub mod notes;
pub mod synth;
pub mod timeline;
pub mod wav;

pub use config::ChimeConfig;
pub use encode::{render_notes_to_audio, PcmEncoder};
pub use error::RenderError;
pub use notes::{PitchClass, SynthNote};
pub use synth::{SynthSettings, Synthesizer};
pub use timeline::render_notes_to_wav;
