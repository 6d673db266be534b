//! Synthesis engine for rendering notes
//!
//! Contains the modulation table, instrument profiles, and the
//! memoizing note synthesizer.

mod acoustic;
mod edm;
mod engine;
mod instrument;
mod modulation;
mod organ;
mod piano;
mod profile;

pub use acoustic::Acoustic;
pub use edm::Edm;
pub use engine::{SynthSettings, Synthesizer, DEFAULT_DURATION};
pub use instrument::Instrument;
pub use modulation::{ModulationFn, ModulationTable};
pub use organ::Organ;
pub use piano::Piano;
pub use profile::{PluckState, ProfileRegistry, SoundProfile, WaveContext};
