use std::ops::RangeInclusive;

use rand::Rng;

/// Uniform choice from a fixed, non-empty set of values.
pub fn pick<T: Copy, R: Rng + ?Sized>(values: &[T], rng: &mut R) -> T {
    values[rng.random_range(0..values.len())]
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Uniform float in `range`, rounded to `decimals` places.
pub fn uniform_rounded<R: Rng + ?Sized>(
    range: RangeInclusive<f64>,
    decimals: i32,
    rng: &mut R,
) -> f64 {
    round_to(rng.random_range(range), decimals)
}

/// `value` plus an integer jitter in `-spread..=spread`, truncated toward zero.
pub fn jittered<R: Rng + ?Sized>(value: f64, spread: i32, rng: &mut R) -> u32 {
    (value + f64::from(rng.random_range(-spread..=spread))) as u32
}
