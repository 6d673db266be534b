//! Timeline assembly
//!
//! Places rendered notes on a time axis: sorts by start time, fills
//! gaps with silence, and concatenates the PCM bodies into one WAV.

use crate::error::RenderError;
use crate::notes::SynthNote;
use crate::synth::{Synthesizer, DEFAULT_DURATION};
use crate::wav;
use std::time::Instant;

/// A note with its resolved position on the timeline
#[derive(Debug, Clone, Copy)]
struct Placed {
    start: f64,
    duration: f64,
    note: SynthNote,
}

/// Assemble notes into a single WAV buffer.
///
/// Notes are placed by start time; a note without one starts where the
/// previous note (in input order) ends. Gaps become silence, overlaps
/// are concatenated sequentially without mixing.
pub fn assemble(
    synth: &mut Synthesizer,
    instrument: &str,
    notes: &[SynthNote],
) -> Result<Vec<u8>, RenderError> {
    let index = synth
        .registry()
        .index_of(instrument)
        .ok_or_else(|| RenderError::InvalidSound {
            name: instrument.to_string(),
        })?;
    let started = Instant::now();

    // Resolve effective start times against a running cursor, in input
    // order, so untimed notes keep their relative position
    let mut placed: Vec<Placed> = Vec::with_capacity(notes.len());
    let mut cursor = 0.0_f64;
    for note in notes {
        let duration = if note.duration > 0.0 {
            note.duration
        } else {
            DEFAULT_DURATION
        };
        let start = note.start_time.unwrap_or(cursor);
        placed.push(Placed {
            start,
            duration,
            note: *note,
        });
        cursor = start + duration;
    }

    // Stable sort keeps input order for equal start times
    placed.sort_by(|a, b| {
        a.start
            .partial_cmp(&b.start)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    synth.prepare(index, notes)?;

    let sample_rate = synth.sample_rate();
    let mut pcm: Vec<u8> = Vec::new();
    let mut cursor = 0.0_f64;
    for item in &placed {
        let gap = item.start - cursor;
        if gap > 0.0 {
            // Exact silence, two bytes per sample
            let silent_samples = (gap * f64::from(sample_rate)).floor() as usize;
            pcm.resize(pcm.len() + silent_samples * 2, 0);
        }

        let rendered = synth.render_note(
            index,
            item.note.pitch_class,
            item.note.octave,
            item.note.duration,
        )?;
        pcm.extend_from_slice(wav::strip(&rendered)?);

        cursor = item.start + item.duration;
    }

    let buffer = wav::wrap(&pcm, sample_rate)?;
    tracing::debug!(
        "assembled {} notes into {} bytes in {:?}",
        placed.len(),
        buffer.len(),
        started.elapsed()
    );
    Ok(buffer)
}

/// Render notes with the named instrument into a WAV buffer
pub fn render_notes_to_wav(
    synth: &mut Synthesizer,
    instrument: &str,
    notes: &[SynthNote],
) -> Result<Vec<u8>, RenderError> {
    assemble(synth, instrument, notes)
}
