//! 1D octave noise used to drive box heights.
//!
//! The sequence is a sum of Perlin octaves: each octave halves the lattice
//! spacing and divides the amplitude by `softness`.

use ::noise::{NoiseFn, Perlin};
use rand::Rng;

/// Parameters of the noise sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseFactors {
    /// Number of samples in the sequence.
    pub size: usize,
    /// Number of octaves summed.
    pub octave: u32,
    /// Base lattice density and also the per-frame scroll step.
    pub interval: usize,
    pub seed: u32,
    /// Amplitude divisor between consecutive octaves.
    pub softness: f32,
}

impl Default for NoiseFactors {
    fn default() -> Self {
        Self {
            size: 800,
            octave: 10,
            interval: 10,
            seed: 0,
            softness: 2.35,
        }
    }
}

impl NoiseFactors {
    /// Default factors with a seed drawn from `0..255`.
    pub fn with_random_seed() -> Self {
        Self {
            seed: rand::thread_rng().gen_range(0..255),
            ..Self::default()
        }
    }
}

/// Generates `factors.size` noise samples.
pub fn generate(factors: &NoiseFactors) -> Vec<f32> {
    let perlin = Perlin::new(factors.seed);
    let base_spacing = factors.size as f64 / factors.interval.max(1) as f64;

    (0..factors.size)
        .map(|i| {
            let mut value = 0.0f64;
            let mut spacing = base_spacing;
            let mut amplitude = 1.0f64;
            for octave in 0..factors.octave {
                // Off-lattice second coordinate; Perlin is zero on integer points.
                let row = 0.5 + octave as f64 * 7.0;
                value += perlin.get([i as f64 / spacing, row]) * amplitude;
                spacing *= 0.5;
                amplitude /= factors.softness as f64;
            }
            value as f32
        })
        .collect()
}

pub fn min(values: &[f32]) -> f32 {
    values.iter().copied().fold(f32::INFINITY, f32::min)
}

pub fn max(values: &[f32]) -> f32 {
    values.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}

/// Linearly maps `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// An empty input range maps everything to `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / span
}
