//! Instrument profiles
//!
//! A profile supplies the attack time, decay exponent, and per-sample
//! wave function for one instrument. Stateful instruments keep their
//! scratch in the [`WaveContext`], which the engine rebuilds for every
//! render.

use crate::error::RenderError;
use crate::synth::acoustic::Acoustic;
use crate::synth::edm::Edm;
use crate::synth::modulation::ModulationTable;
use crate::synth::organ::Organ;
use crate::synth::piano::Piano;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Scratch state for plucked-string synthesis
#[derive(Debug, Default)]
pub struct PluckState {
    /// Delay line holding roughly one period of the waveform
    pub table: Vec<f64>,

    /// Play position within the delay line
    pub cursor: usize,

    /// Completed passes over the delay line
    pub period_count: u32,
}

/// Per-render evaluation context handed to wave functions.
///
/// Built fresh at the start of every render; nothing in it survives
/// the render or is shared between notes.
pub struct WaveContext<'a> {
    /// Shared modulation function table
    pub modulation: &'a ModulationTable,

    /// Deterministic random stream for this render
    pub rng: Pcg32,

    /// Plucked-string scratch
    pub pluck: PluckState,
}

impl<'a> WaveContext<'a> {
    /// Create a context seeded for one render
    pub fn new(modulation: &'a ModulationTable, seed: u64) -> Self {
        Self {
            modulation,
            rng: Pcg32::seed_from_u64(seed),
            pluck: PluckState::default(),
        }
    }
}

/// Capability interface for one instrument.
///
/// `peak` is the peak amplitude in 16-bit sample units (volume scaled
/// by 32768), not the 0-1 configuration value.
pub trait SoundProfile: Send + Sync {
    /// Unique instrument name
    fn name(&self) -> &str;

    /// Fade-in time in seconds
    fn attack(&self, sample_rate: f64, frequency: f64, peak: f64) -> f64;

    /// Decay exponent applied after the attack phase
    fn dampen(&self, sample_rate: f64, frequency: f64, peak: f64) -> f64;

    /// Raw waveform sample in [-1, 1] before envelope scaling
    fn wave(
        &self,
        i: usize,
        sample_rate: f64,
        frequency: f64,
        peak: f64,
        ctx: &mut WaveContext,
    ) -> f64;
}

/// Registry of instrument profiles plus the modulation table they share.
///
/// Append-only: indices handed out stay valid for the life of the
/// registry.
pub struct ProfileRegistry {
    modulation: ModulationTable,
    profiles: Vec<Box<dyn SoundProfile>>,
}

impl ProfileRegistry {
    /// Create a registry with no profiles
    pub fn empty() -> Self {
        Self {
            modulation: ModulationTable::new(),
            profiles: Vec::new(),
        }
    }

    /// Create a registry with the built-in instruments
    /// (piano, organ, acoustic, edm)
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.profiles.push(Box::new(Piano));
        registry.profiles.push(Box::new(Organ));
        registry.profiles.push(Box::new(Acoustic));
        registry.profiles.push(Box::new(Edm));
        registry
    }

    /// Register a profile, returning its index
    pub fn register(&mut self, profile: Box<dyn SoundProfile>) -> Result<usize, RenderError> {
        if self.index_of(profile.name()).is_some() {
            return Err(RenderError::DuplicateSound {
                name: profile.name().to_string(),
            });
        }
        self.profiles.push(profile);
        Ok(self.profiles.len() - 1)
    }

    /// Look up a profile index by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.name() == name)
    }

    /// Get a profile by index
    pub fn get(&self, index: usize) -> Option<&dyn SoundProfile> {
        self.profiles.get(index).map(|p| p.as_ref())
    }

    /// Registered instrument names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name()).collect()
    }

    /// Number of registered profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry has no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The shared modulation table
    pub fn modulation(&self) -> &ModulationTable {
        &self.modulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat;

    impl SoundProfile for Flat {
        fn name(&self) -> &str {
            "flat"
        }
        fn attack(&self, _sample_rate: f64, _frequency: f64, _peak: f64) -> f64 {
            0.01
        }
        fn dampen(&self, _sample_rate: f64, _frequency: f64, _peak: f64) -> f64 {
            1.0
        }
        fn wave(
            &self,
            _i: usize,
            _sample_rate: f64,
            _frequency: f64,
            _peak: f64,
            _ctx: &mut WaveContext,
        ) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ProfileRegistry::builtin();
        assert_eq!(registry.names(), vec!["piano", "organ", "acoustic", "edm"]);
        assert_eq!(registry.index_of("acoustic"), Some(2));
        assert_eq!(registry.index_of("kazoo"), None);
    }

    #[test]
    fn test_register_appends() {
        let mut registry = ProfileRegistry::builtin();
        let index = registry.register(Box::new(Flat)).unwrap();

        assert_eq!(index, 4);
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.get(index).unwrap().name(), "flat");
    }

    #[test]
    fn test_register_rejects_duplicate_name() {
        let mut registry = ProfileRegistry::empty();
        registry.register(Box::new(Flat)).unwrap();

        let err = registry.register(Box::new(Flat)).unwrap_err();
        assert_eq!(
            err,
            RenderError::DuplicateSound {
                name: "flat".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_wave_context_determinism() {
        use rand::Rng;

        let table = ModulationTable::new();
        let mut a = WaveContext::new(&table, 42);
        let mut b = WaveContext::new(&table, 42);

        for _ in 0..32 {
            assert_eq!(a.rng.gen::<u32>(), b.rng.gen::<u32>());
        }
    }

    #[test]
    fn test_wave_context_starts_clean() {
        let table = ModulationTable::new();
        let ctx = WaveContext::new(&table, 7);

        assert!(ctx.pluck.table.is_empty());
        assert_eq!(ctx.pluck.cursor, 0);
        assert_eq!(ctx.pluck.period_count, 0);
    }
}
