//! Modulation function table
//!
//! Sine-family generators at fixed frequency multipliers. Instrument
//! wave functions compose these by table index.

use std::f64::consts::PI;

/// A modulation function: (sample index, sample rate, frequency, argument)
/// to an amplitude. The argument doubles as phase offset and as the
/// carrier for nested calls.
pub type ModulationFn = fn(usize, f64, f64, f64) -> f64;

fn sine(i: usize, s: f64, f: f64, x: f64) -> f64 {
    (2.0 * PI * (i as f64 / s) * f + x).sin()
}

fn sine_double(i: usize, s: f64, f: f64, x: f64) -> f64 {
    (4.0 * PI * (i as f64 / s) * f + x).sin()
}

fn sine_quad(i: usize, s: f64, f: f64, x: f64) -> f64 {
    (8.0 * PI * (i as f64 / s) * f + x).sin()
}

fn sine_half(i: usize, s: f64, f: f64, x: f64) -> f64 {
    (0.5 * PI * (i as f64 / s) * f + x).sin()
}

fn sine_quarter(i: usize, s: f64, f: f64, x: f64) -> f64 {
    (0.25 * PI * (i as f64 / s) * f + x).sin()
}

fn soft_sine(i: usize, s: f64, f: f64, x: f64) -> f64 {
    0.5 * sine(i, s, f, x)
}

fn soft_double(i: usize, s: f64, f: f64, x: f64) -> f64 {
    0.5 * sine_double(i, s, f, x)
}

fn soft_quad(i: usize, s: f64, f: f64, x: f64) -> f64 {
    0.5 * sine_quad(i, s, f, x)
}

fn soft_half(i: usize, s: f64, f: f64, x: f64) -> f64 {
    0.5 * sine_half(i, s, f, x)
}

fn soft_quarter(i: usize, s: f64, f: f64, x: f64) -> f64 {
    0.5 * sine_quarter(i, s, f, x)
}

/// Ordered, immutable table of modulation functions.
///
/// Index 0 is the fundamental; 1-2 raise the frequency, 3-4 lower it,
/// 5-9 are half-amplitude variants of 0-4.
pub struct ModulationTable {
    funcs: Vec<ModulationFn>,
}

impl ModulationTable {
    /// Build the standard table
    pub fn new() -> Self {
        Self {
            funcs: vec![
                sine,
                sine_double,
                sine_quad,
                sine_half,
                sine_quarter,
                soft_sine,
                soft_double,
                soft_quad,
                soft_half,
                soft_quarter,
            ],
        }
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Evaluate the function at `index`.
    ///
    /// Panics on an out-of-range index; wave functions only ever use
    /// the fixed indices of the standard table.
    pub fn call(&self, index: usize, i: usize, sample_rate: f64, frequency: f64, x: f64) -> f64 {
        self.funcs[index](i, sample_rate, frequency, x)
    }
}

impl Default for ModulationTable {
    fn default() -> Self {
        Self::new()
    }
}
