//! Batch evaluation over evenly spaced positions.
//!
//! With the `threading` feature the samples are computed on rayon's pool;
//! each sample is independent, so the output is identical either way.

use crate::noise::{params::NoiseParams, PerlinNoise1D};

/// Position of sample `k` in a range starting at `start` with spacing `step`.
#[inline]
pub fn range_position(start: f64, step: f64, k: usize) -> f64 {
    start + k as f64 * step
}

/// Evaluate `count` samples at `start + k * step`, in order.
///
/// `params.position` is ignored; persistence and octaves come from `params`.
pub fn sample_range(
    noise: &PerlinNoise1D,
    params: &NoiseParams,
    start: f64,
    step: f64,
    count: usize,
) -> Vec<f64> {
    let eval = |k: usize| {
        noise.evaluate(range_position(start, step, k), params.persistence, params.octaves)
    };

    #[cfg(feature = "threading")]
    let values: Vec<f64> = {
        use rayon::prelude::*;
        (0..count).into_par_iter().map(eval).collect()
    };
    #[cfg(not(feature = "threading"))]
    let values: Vec<f64> = (0..count).map(eval).collect();

    values
}
