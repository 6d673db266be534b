//! Edm profile: saturated electronic lead

use crate::synth::profile::{SoundProfile, WaveContext};

/// Distorted lead built from odd-power harmonics
pub struct Edm;

impl SoundProfile for Edm {
    fn name(&self) -> &str {
        "edm"
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _peak: f64) -> f64 {
        0.002
    }

    fn dampen(&self, _sample_rate: f64, _frequency: f64, _peak: f64) -> f64 {
        1.0
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
        let harmonic = |slot: usize| m.call(slot, i, sample_rate, frequency, 0.0);

        // Odd powers of the first three harmonics saturate the tone
        let stack = harmonic(0).powi(3) + harmonic(1).powi(5) + harmonic(2).powi(7);

        // Fold the stack through two slow carriers, then ride the result
        // on the doubled frequency next to a soft offset fundamental
        let folded = m.call(
            9,
            i,
            sample_rate,
            frequency,
            m.call(3, i, sample_rate, frequency, stack),
        );
        m.call(1, i, sample_rate, frequency, folded + 0.5 * base(1.75))
    }
}
