//! Configuration schema definitions

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Main configuration for Chime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChimeConfig {
    /// Audio rendering settings
    #[serde(default)]
    pub audio: AudioConfig,

    /// Encoder settings
    #[serde(default)]
    pub encode: EncodeConfig,
}

impl ChimeConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.audio.sample_rate < 8000 || self.audio.sample_rate > 192000 {
            bail!("Sample rate must be between 8000 and 192000");
        }
        if !(self.audio.volume > 0.0 && self.audio.volume <= 1.0) {
            bail!("Volume must be greater than 0.0 and at most 1.0");
        }
        if self.encode.bitrate < 8000 || self.encode.bitrate > 320000 {
            bail!("Bitrate must be between 8000 and 320000");
        }

        Ok(())
    }
}

/// Audio rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Sample rate in Hz (default: 44100)
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Peak volume 0.0-1.0 (default: 1.0)
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_sample_rate() -> u32 { 44100 }
fn default_volume() -> f64 { 1.0 }

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            volume: default_volume(),
        }
    }
}

/// Encoder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Target bitrate in bits per second (default: 128000)
    #[serde(default = "default_bitrate")]
    pub bitrate: u32,
}

fn default_bitrate() -> u32 { 128000 }

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            bitrate: default_bitrate(),
        }
    }
}
