//! Instrument handles

use crate::error::RenderError;
use crate::synth::engine::Synthesizer;
use std::sync::Arc;

/// A named reference to a registered instrument.
///
/// Resolved once by [`Synthesizer::instrument`]; rendering goes back
/// through the engine so handles stay cheap to clone and copy around.
#[derive(Debug, Clone)]
pub struct Instrument {
    name: String,
    index: usize,
}

impl Instrument {
    pub(crate) fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }

    /// The instrument's registered name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render one note with this instrument
    pub fn generate(
        &self,
        synth: &mut Synthesizer,
        pitch: &str,
        octave: i32,
        duration: f64,
    ) -> Result<Arc<Vec<u8>>, RenderError> {
        let pitch = pitch.parse()?;
        synth.render_note(self.index, pitch, octave, duration)
    }
}
