//! Piano profile: bright struck-string timbre

use crate::synth::profile::{SoundProfile, WaveContext};

/// Struck-string instrument with a sharp onset and pitch-dependent decay
pub struct Piano;

impl SoundProfile for Piano {
    fn name(&self) -> &str {
        "piano"
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _peak: f64) -> f64 {
        0.002
    }

    fn dampen(&self, sample_rate: f64, frequency: f64, peak: f64) -> f64 {
        // Decay sharpens with pitch and loudness
        (0.5 * (frequency * peak / sample_rate).ln()).powi(2)
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

        // Squared fundamental plus two detuned partials, frequency-doubled
        m.call(
            1,
            i,
            sample_rate,
            frequency,
            base(0.0).powi(2) + 0.75 * base(0.25) + 0.1 * base(0.5),
        )
    }
}
