//! Multi-octave 1-D value noise.
//!
//! Lattice values come from a [`NoiseTable`], are smoothed with their two
//! neighbours, then joined by a 4-point cubic. Octave `i` samples the curve at
//! `x * 2^i` and weighs it by `persistence^i`.
pub mod interp;
pub mod params;
pub mod table;

use interp::cubic_interpolate;
use params::NoiseParams;
use table::{NoiseTable, TABLE_SIZE};

/// 1-D value-noise evaluator owning its lattice table.
#[derive(Debug, Clone, Default)]
pub struct PerlinNoise1D {
    table: NoiseTable,
}

impl PerlinNoise1D {
    pub fn new(table: NoiseTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &NoiseTable {
        &self.table
    }

    /// Lattice value at `x` averaged with its neighbours (weights ½, ¼, ¼).
    #[inline]
    pub fn smoothed_noise(&self, x: i64) -> f64 {
        // Only x mod TABLE_SIZE matters; reducing first keeps x ± 1 from overflowing.
        let x = x.rem_euclid(TABLE_SIZE as i64);
        self.table.raw_noise(x) / 2.0
            + self.table.raw_noise(x - 1) / 4.0
            + self.table.raw_noise(x + 1) / 4.0
    }

    /// Cubic interpolation of the smoothed lattice at a real position.
    ///
    /// The lattice cell is found by truncating toward zero, not flooring, so
    /// `x = -0.5` reads the cell starting at 0 with a fraction of -0.5. Positions
    /// in (-1, 0) extrapolate cell 0 backwards, which leaves a kink at the origin.
    pub fn interpolated_noise(&self, x: f64) -> f64 {
        let whole = x.trunc();
        let fraction = x - whole;
        // Exact on integral values, so positions past i64 range keep fraction 0.
        let i = whole.rem_euclid(TABLE_SIZE as f64) as i64;
        let v1 = self.smoothed_noise(i);
        let v2 = self.smoothed_noise(i + 1);
        let v3 = self.smoothed_noise(i + 2);
        let v4 = self.smoothed_noise(i + 3);
        cubic_interpolate(v1, v2, v3, v4, fraction)
    }

    /// Contribution of a single octave `i` at position `x`.
    pub fn octave(&self, x: f64, persistence: f64, i: i32) -> f64 {
        let frequency = 2.0f64.powi(i);
        let amplitude = persistence.powi(i);
        self.interpolated_noise(x * frequency) * amplitude
    }

    /// Sum of `octaves` layers at `x`. Returns 0 when `octaves <= 0`.
    ///
    /// Total over its inputs: non-finite values propagate as NaN or infinity.
    pub fn evaluate(&self, x: f64, persistence: f64, octaves: i32) -> f64 {
        let mut total = 0.0f64;
        for i in 0..octaves.max(0) {
            total += self.octave(x, persistence, i);
        }
        total
    }

    /// [`evaluate`](Self::evaluate) over a parameter set.
    /// `additional_seed` is carried by the caller only and has no effect here.
    pub fn evaluate_params(&self, params: &NoiseParams) -> f64 {
        self.evaluate(params.position, params.persistence, params.octaves)
    }
}
