//! Minimal WAV container codec
//!
//! Builds and strips the canonical 44-byte header (RIFF, "fmt " with
//! PCM, "data") around raw little-endian 16-bit samples.

use crate::error::RenderError;

/// Length of the canonical header in bytes
pub const HEADER_LEN: usize = 44;

/// Build a 44-byte WAV header for `data_len` bytes of PCM.
///
/// `data_len` must leave room for the 36 header bytes counted by the
/// RIFF size field.
pub fn build_header(
    data_len: u32,
    sample_rate: u32,
    channels: u16,
    bits_per_sample: u16,
) -> [u8; HEADER_LEN] {
    let byte_rate = sample_rate * u32::from(channels) * u32::from(bits_per_sample / 8);
    let block_align = channels * (bits_per_sample / 8);

    let mut header = [0u8; HEADER_LEN];

    // RIFF chunk
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&(36 + data_len).to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt subchunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // subchunk size
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&bits_per_sample.to_le_bytes());

    // data subchunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_len.to_le_bytes());

    header
}

/// Wrap raw mono 16-bit PCM bytes in a WAV container.
///
/// The RIFF size fields are 32-bit, capping the body just under
/// 4 GiB; anything longer is rejected rather than truncated.
pub fn wrap(pcm: &[u8], sample_rate: u32) -> Result<Vec<u8>, RenderError> {
    let data_len = data_chunk_len(pcm.len())?;

    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm.len());
    buffer.extend_from_slice(&build_header(data_len, sample_rate, 1, 16));
    buffer.extend_from_slice(pcm);
    Ok(buffer)
}

/// Strip the header off a WAV buffer, returning the PCM body.
///
/// The magic markers and declared lengths are checked first; anything
/// that is not a well-formed 44-byte-header WAV is rejected.
pub fn strip(buffer: &[u8]) -> Result<&[u8], RenderError> {
    if buffer.len() < HEADER_LEN {
        return Err(malformed("shorter than a WAV header"));
    }
    if &buffer[0..4] != b"RIFF" {
        return Err(malformed("missing RIFF marker"));
    }
    if &buffer[8..12] != b"WAVE" {
        return Err(malformed("missing WAVE marker"));
    }
    if &buffer[12..16] != b"fmt " {
        return Err(malformed("missing fmt chunk"));
    }
    if &buffer[36..40] != b"data" {
        return Err(malformed("missing data chunk"));
    }

    let data = &buffer[HEADER_LEN..];

    let declared = u32::from_le_bytes([buffer[40], buffer[41], buffer[42], buffer[43]]) as usize;
    if declared != data.len() {
        return Err(malformed(&format!(
            "data chunk declares {} bytes but {} follow the header",
            declared,
            data.len()
        )));
    }

    let riff_size = u32::from_le_bytes([buffer[4], buffer[5], buffer[6], buffer[7]]) as usize;
    if riff_size != 36 + data.len() {
        return Err(malformed(&format!(
            "RIFF size {} does not match {} data bytes",
            riff_size,
            data.len()
        )));
    }

    Ok(data)
}

/// Decode PCM bytes into 16-bit samples
pub fn samples(pcm: &[u8]) -> Vec<i16> {
    pcm.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Check a PCM body length against the 32-bit RIFF size fields
fn data_chunk_len(len: usize) -> Result<u32, RenderError> {
    match u32::try_from(len) {
        Ok(n) if n <= u32::MAX - 36 => Ok(n),
        _ => Err(malformed(&format!(
            "{} PCM bytes exceed the 4 GiB RIFF limit",
            len
        ))),
    }
}

fn malformed(reason: &str) -> RenderError {
    RenderError::MalformedContainer {
        reason: reason.to_string(),
    }
}
