//! Encoder boundary
//!
//! The pipeline ends at a trait seam: assembled PCM is handed to an
//! external encoder (an MP3 encoder, typically) in one pass.

use crate::notes::SynthNote;
use crate::synth::Synthesizer;
use crate::timeline;
use crate::wav;

/// Trait for PCM encoders
pub trait PcmEncoder: Send {
    /// Get the name of this encoder
    fn name(&self) -> &str;

    /// Encode a block of mono 16-bit samples
    fn encode(&mut self, samples: &[i16]) -> anyhow::Result<Vec<u8>>;

    /// Finalize the stream and return any buffered bytes
    fn flush(&mut self) -> anyhow::Result<Vec<u8>>;
}

/// Render notes and push the whole waveform through an encoder.
///
/// The timeline is assembled first, then the encoder sees the complete
/// sample body in a single `encode` call followed by a single `flush`.
pub fn render_notes_to_audio(
    synth: &mut Synthesizer,
    instrument: &str,
    notes: &[SynthNote],
    encoder: &mut dyn PcmEncoder,
) -> anyhow::Result<Vec<u8>> {
    let buffer = timeline::assemble(synth, instrument, notes)?;
    let samples = wav::samples(wav::strip(&buffer)?);

    let mut audio = encoder.encode(&samples)?;
    audio.extend(encoder.flush()?);
    tracing::debug!(
        "encoded {} samples into {} bytes with {}",
        samples.len(),
        audio.len(),
        encoder.name()
    );
    Ok(audio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::notes::PitchClass;
    use crate::synth::{ProfileRegistry, SynthSettings};

    /// Records calls and echoes samples back as little-endian bytes
    struct EchoEncoder {
        encode_calls: usize,
        flush_calls: usize,
    }

    impl EchoEncoder {
        fn new() -> Self {
            Self {
                encode_calls: 0,
                flush_calls: 0,
            }
        }
    }

    impl PcmEncoder for EchoEncoder {
        fn name(&self) -> &str {
            "echo"
        }

        fn encode(&mut self, samples: &[i16]) -> anyhow::Result<Vec<u8>> {
            self.encode_calls += 1;
            Ok(samples
                .iter()
                .flat_map(|s| s.to_le_bytes())
                .collect())
        }

        fn flush(&mut self) -> anyhow::Result<Vec<u8>> {
            self.flush_calls += 1;
            Ok(b"tail".to_vec())
        }
    }

    struct FailingEncoder;

    impl PcmEncoder for FailingEncoder {
        fn name(&self) -> &str {
            "failing"
        }

        fn encode(&mut self, _samples: &[i16]) -> anyhow::Result<Vec<u8>> {
            anyhow::bail!("bitstream error")
        }

        fn flush(&mut self) -> anyhow::Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    fn fast_synth() -> Synthesizer {
        let settings = SynthSettings {
            sample_rate: 8000,
            volume: 1.0,
        };
        Synthesizer::new(settings, ProfileRegistry::builtin())
    }

    #[test]
    fn test_encoder_called_once_then_flushed() {
        let mut synth = fast_synth();
        let notes = vec![
            SynthNote::new(PitchClass::C, 4, 0.25),
            SynthNote::new(PitchClass::E, 4, 0.25),
        ];
        let mut encoder = EchoEncoder::new();

        let audio = render_notes_to_audio(&mut synth, "piano", &notes, &mut encoder).unwrap();

        assert_eq!(encoder.encode_calls, 1);
        assert_eq!(encoder.flush_calls, 1);
        assert!(audio.ends_with(b"tail"));
    }

    #[test]
    fn test_encoder_sees_assembled_body() {
        let notes = vec![SynthNote::new(PitchClass::A, 4, 0.25)];

        let mut synth = fast_synth();
        let mut encoder = EchoEncoder::new();
        let audio = render_notes_to_audio(&mut synth, "organ", &notes, &mut encoder).unwrap();

        let mut reference = fast_synth();
        let wrapped = timeline::assemble(&mut reference, "organ", &notes).unwrap();
        let body = wav::strip(&wrapped).unwrap();

        // Echoed bytes are exactly the stripped body, then the tail
        assert_eq!(&audio[..audio.len() - 4], body);
    }

    #[test]
    fn test_encoder_failure_propagates() {
        let mut synth = fast_synth();
        let notes = vec![SynthNote::new(PitchClass::C, 4, 0.25)];
        let mut encoder = FailingEncoder;

        let err = render_notes_to_audio(&mut synth, "piano", &notes, &mut encoder).unwrap_err();
        assert!(err.to_string().contains("bitstream error"));
    }

    #[test]
    fn test_unknown_instrument_propagates() {
        let mut synth = fast_synth();
        let notes = vec![SynthNote::new(PitchClass::C, 4, 0.25)];
        let mut encoder = EchoEncoder::new();

        let err = render_notes_to_audio(&mut synth, "theremin", &notes, &mut encoder).unwrap_err();
        assert!(err.downcast_ref::<RenderError>().is_some());
    }
}
