//! Organ profile: slow swell, sustained additive tone

use crate::synth::profile::{SoundProfile, WaveContext};

/// Sustained pipe tone built from stacked detuned partials
pub struct Organ;

impl SoundProfile for Organ {
    fn name(&self) -> &str {
        "organ"
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _peak: f64) -> f64 {
        0.3
    }

    fn dampen(&self, _sample_rate: f64, frequency: f64, _peak: f64) -> f64 {
        1.0 + frequency * 0.01
    }

    fn wave(
        &self,
        i: usize,
        sample_rate: f64,
        frequency: f64,
        _peak: f64,
        ctx: &mut WaveContext,
    ) -> f64 {
        let m = ctx.modulation;
        let base = |x: f64| m.call(0, i, sample_rate, frequency, x);

        // Fundamental plus two fading detuned partials, frequency-doubled
        m.call(
            1,
            i,
            sample_rate,
            frequency,
            base(0.0) + 0.5 * base(0.25) + 0.25 * base(0.5),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::modulation::ModulationTable;

    #[test]
    fn test_organ_envelope_parameters() {
        let organ = Organ;
        assert_eq!(organ.attack(44100.0, 440.0, 32768.0), 0.3);
        assert_eq!(organ.dampen(44100.0, 440.0, 32768.0), 5.4);
        assert_eq!(organ.dampen(44100.0, 100.0, 32768.0), 2.0);
    }

    #[test]
    fn test_organ_wave_in_range() {
        let organ = Organ;
        let table = ModulationTable::new();
        let mut ctx = WaveContext::new(&table, 0);

        for i in 0..2048 {
            let sample = organ.wave(i, 44100.0, 220.0, 32768.0, &mut ctx);
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_organ_swells_slower_than_piano() {
        use crate::synth::piano::Piano;

        let organ_attack = Organ.attack(44100.0, 440.0, 32768.0);
        let piano_attack = Piano.attack(44100.0, 440.0, 32768.0);
        assert!(organ_attack > piano_attack);
    }
}
