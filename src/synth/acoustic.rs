//! Acoustic profile: plucked-string synthesis
//!
//! Karplus-Strong style: a delay line seeded with a random burst is
//! averaged into itself while a play cursor loops over it. Because the
//! line length is an integer but the true period rarely is, a
//! fractional-period counter wraps some passes one sample early with a
//! cross-fade, keeping the pitch accurate.

use crate::synth::profile::{SoundProfile, WaveContext};
use rand::Rng;

/// Plucked-string instrument with per-render delay-line state
pub struct Acoustic;

impl SoundProfile for Acoustic {
    fn name(&self) -> &str {
        "acoustic"
    }

    fn attack(&self, _sample_rate: f64, _frequency: f64, _peak: f64) -> f64 {
        0.002
    }

    fn dampen(&self, _sample_rate: f64, _frequency: f64, _peak: f64) -> f64 {
        1.0
    }

    fn wave(
        &self,
        _i: usize,
        sample_rate: f64,
        frequency: f64,
        _peak: f64,
        ctx: &mut WaveContext,
    ) -> f64 {
        let period = sample_rate / frequency;
        let whole_period = period.floor() as usize;
        let fraction_hundredths = ((period - period.floor()) * 100.0).floor() as u32;

        // Seed the delay line with a random burst, one sample per call
        if ctx.pluck.table.len() < period.ceil() as usize {
            let excitation = if ctx.rng.gen::<bool>() { 1.0 } else { -1.0 };
            ctx.pluck.table.push(excitation);
            return excitation;
        }

        let pluck = &mut ctx.pluck;
        let last = pluck.table.len() - 1;
        let next = if pluck.cursor >= last { 0 } else { pluck.cursor + 1 };

        // Average adjacent entries: the string loses high frequencies
        pluck.table[pluck.cursor] = (pluck.table[next] + pluck.table[pluck.cursor]) * 0.5;

        // The counter picks, per period, whether to wrap one sample early
        // with a cross-fade (short period) or play the full line (long
        // period), so the average period tracks the fractional part.
        let mut wrap = false;
        if pluck.cursor + 1 >= whole_period {
            if pluck.cursor + 1 < period.ceil() as usize {
                if pluck.period_count % 100 >= fraction_hundredths {
                    wrap = true;
                    pluck.table[pluck.cursor + 1] =
                        (pluck.table[0] + pluck.table[pluck.cursor + 1]) * 0.5;
                    pluck.period_count += 1;
                }
            } else {
                wrap = true;
                pluck.period_count += 1;
            }
        }

        let out = pluck.table[pluck.cursor];
        pluck.cursor = if wrap { 0 } else { pluck.cursor + 1 };
        out
    }
}
