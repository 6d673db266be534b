//! Synthesis engine
//!
//! Renders single notes into WAV buffers and memoizes them. The cache
//! key is (instrument, octave, pitch class, duration); changing the
//! sample rate or volume clears it.

use crate::error::RenderError;
use crate::notes::{PitchClass, SynthNote};
use crate::synth::instrument::Instrument;
use crate::synth::profile::{ProfileRegistry, SoundProfile, WaveContext};
use crate::wav;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Duration used when a note supplies none
pub const DEFAULT_DURATION: f64 = 2.0;

/// Engine-wide settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthSettings {
    /// Output sample rate in Hz
    pub sample_rate: u32,

    /// Volume as a fraction of full scale (0.0-1.0)
    pub volume: f64,
}

impl Default for SynthSettings {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            volume: 1.0,
        }
    }
}

/// Cache key for one rendered note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    instrument: usize,
    pitch: PitchClass,
    octave: u8,
    duration_bits: u64,
}

impl CacheKey {
    /// Normalize inputs: the octave clamps to 1-8 and non-positive
    /// durations fall back to the default
    fn new(instrument: usize, pitch: PitchClass, octave: i32, duration: f64) -> Self {
        let octave = octave.clamp(1, 8) as u8;
        let duration = if duration > 0.0 {
            duration
        } else {
            DEFAULT_DURATION
        };
        Self {
            instrument,
            pitch,
            octave,
            duration_bits: duration.to_bits(),
        }
    }

    fn duration(&self) -> f64 {
        f64::from_bits(self.duration_bits)
    }
}

/// The note synthesizer
pub struct Synthesizer {
    settings: SynthSettings,
    registry: ProfileRegistry,
    cache: HashMap<CacheKey, Arc<Vec<u8>>>,
}

impl Synthesizer {
    /// Create a synthesizer over the given registry.
    ///
    /// Settings clamp to the same ranges the setters enforce.
    pub fn new(settings: SynthSettings, registry: ProfileRegistry) -> Self {
        let settings = SynthSettings {
            sample_rate: settings.sample_rate.clamp(8000, 192_000),
            volume: settings.volume.clamp(0.0, 1.0),
        };
        Self {
            settings,
            registry,
            cache: HashMap::new(),
        }
    }

    /// The active sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.settings.sample_rate
    }

    /// The active volume (0.0-1.0)
    pub fn volume(&self) -> f64 {
        self.settings.volume
    }

    /// The instrument registry
    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Number of cached renders
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Change the sample rate (clamped to 8000-192000 Hz).
    /// Clears the render cache.
    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        self.settings.sample_rate = sample_rate.clamp(8000, 192_000);
        self.cache.clear();
    }

    /// Change the volume (clamped to 0.0-1.0).
    /// Clears the render cache.
    pub fn set_volume(&mut self, volume: f64) {
        self.settings.volume = volume.clamp(0.0, 1.0);
        self.cache.clear();
    }

    /// Register an additional instrument profile, returning its index.
    ///
    /// The registry is append-only, so cached renders stay valid.
    pub fn register_profile(&mut self, profile: Box<dyn SoundProfile>) -> Result<usize, RenderError> {
        self.registry.register(profile)
    }

    /// Resolve an instrument handle by name
    pub fn instrument(&self, name: &str) -> Result<Instrument, RenderError> {
        let index = self
            .registry
            .index_of(name)
            .ok_or_else(|| RenderError::InvalidSound {
                name: name.to_string(),
            })?;
        Ok(Instrument::new(name.to_string(), index))
    }

    /// Render one note to a WAV buffer.
    ///
    /// `pitch` must be one of the 12 pitch class names ("C" through
    /// "B", sharps spelled "C#"). The octave clamps to 1-8 and a
    /// non-positive duration falls back to 2 seconds.
    pub fn render(
        &mut self,
        instrument: &str,
        pitch: &str,
        octave: i32,
        duration: f64,
    ) -> Result<Arc<Vec<u8>>, RenderError> {
        let index = self
            .registry
            .index_of(instrument)
            .ok_or_else(|| RenderError::InvalidSound {
                name: instrument.to_string(),
            })?;
        let pitch: PitchClass = pitch.parse()?;
        self.render_note(index, pitch, octave, duration)
    }

    /// Render one note by registry index
    pub fn render_note(
        &mut self,
        index: usize,
        pitch: PitchClass,
        octave: i32,
        duration: f64,
    ) -> Result<Arc<Vec<u8>>, RenderError> {
        let key = CacheKey::new(index, pitch, octave, duration);
        let started = Instant::now();

        if let Some(hit) = self.cache.get(&key) {
            let buffer = Arc::clone(hit);
            tracing::debug!(
                "cache hit {}{} {:.2}s in {:?}",
                pitch.name(),
                key.octave,
                key.duration(),
                started.elapsed()
            );
            return Ok(buffer);
        }

        let buffer = Arc::new(self.render_uncached(key)?);
        self.cache.insert(key, Arc::clone(&buffer));
        tracing::debug!(
            "rendered {}{} {:.2}s in {:?}",
            pitch.name(),
            key.octave,
            key.duration(),
            started.elapsed()
        );
        Ok(buffer)
    }

    /// Render and cache every distinct uncached note of a batch, in
    /// parallel. Subsequent renders of these notes are cache hits.
    pub fn prepare(&mut self, index: usize, notes: &[SynthNote]) -> Result<(), RenderError> {
        let mut pending: Vec<CacheKey> = Vec::new();
        for note in notes {
            let key = CacheKey::new(index, note.pitch_class, note.octave, note.duration);
            if !self.cache.contains_key(&key) && !pending.contains(&key) {
                pending.push(key);
            }
        }
        if pending.is_empty() {
            return Ok(());
        }

        tracing::debug!("pre-rendering {} distinct notes", pending.len());
        let engine = &*self;
        let rendered: Vec<(CacheKey, Result<Vec<u8>, RenderError>)> = pending
            .par_iter()
            .map(|&key| (key, engine.render_uncached(key)))
            .collect();

        for (key, result) in rendered {
            self.cache.insert(key, Arc::new(result?));
        }
        Ok(())
    }

    /// Synthesize a note and wrap it in a WAV header, bypassing the cache
    fn render_uncached(&self, key: CacheKey) -> Result<Vec<u8>, RenderError> {
        let profile = self
            .registry
            .get(key.instrument)
            .ok_or(RenderError::InvalidSoundIndex {
                index: key.instrument,
            })?;

        let sample_rate = f64::from(self.settings.sample_rate);
        let frequency = key.pitch.frequency(i32::from(key.octave));
        let duration = key.duration();

        // Profiles see the volume as a peak amplitude in sample units
        let peak = (self.settings.volume * 32768.0).round();

        let attack_secs = profile.attack(sample_rate, frequency, peak);
        let dampen = profile.dampen(sample_rate, frequency, peak);

        let total = (sample_rate * duration).floor() as usize;
        let attack_len = ((sample_rate * attack_secs).floor() as usize).min(total);

        let mut ctx = WaveContext::new(self.registry.modulation(), self.render_seed(&key));
        let mut pcm = Vec::with_capacity(total * 2);

        // Linear fade-in over the attack span
        for i in 0..attack_len {
            let envelope = i as f64 / (sample_rate * attack_secs);
            let value = peak * envelope * profile.wave(i, sample_rate, frequency, peak, &mut ctx);
            pcm.extend_from_slice(&(value as i16).to_le_bytes());
        }

        // Power-law decay over the remainder
        for i in attack_len..total {
            let progress =
                (i as f64 - sample_rate * attack_secs) / (sample_rate * (duration - attack_secs));
            let envelope = (1.0 - progress).powf(dampen);
            let value = peak * envelope * profile.wave(i, sample_rate, frequency, peak, &mut ctx);
            pcm.extend_from_slice(&(value as i16).to_le_bytes());
        }

        wav::wrap(&pcm, self.settings.sample_rate)
    }

    /// Fold the key and settings into the render's random seed, so a
    /// given key always produces the same bytes under fixed settings
    fn render_seed(&self, key: &CacheKey) -> u64 {
        let mut seed = 0xcbf2_9ce4_8422_2325u64;
        for part in [
            key.instrument as u64,
            key.pitch as u64,
            u64::from(key.octave),
            key.duration_bits,
            u64::from(self.settings.sample_rate),
            self.settings.volume.to_bits(),
        ] {
            seed ^= part;
            seed = seed.wrapping_mul(0x0000_0100_0000_01b3);
        }
        seed
    }
}
