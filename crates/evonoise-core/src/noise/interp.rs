//! Interpolation kernels between lattice samples.

use std::f64::consts::PI;

/// Four-point cubic through `v1` (t = 0) and `v2` (t = 1), shaped by the
/// outer neighbours `v0` and `v3`.
///
/// `t` is expected in `[0, 1]`. Values outside still evaluate the same cubic,
/// which gives a rough extrapolation.
#[inline]
pub fn cubic_interpolate(v0: f64, v1: f64, v2: f64, v3: f64, t: f64) -> f64 {
    let p = (v3 - v2) - (v0 - v1);
    let q = (v0 - v1) - p;
    let r = v2 - v0;
    let s = v1;
    p * t * t * t + q * t * t + r * t + s
}

/// Cosine-eased blend from `a` (t = 0) to `b` (t = 1).
///
/// Cheaper alternative to [`cubic_interpolate`] when only two samples are
/// available; the evaluator does not use it.
#[inline]
pub fn cosine_interpolate(a: f64, b: f64, t: f64) -> f64 {
    let f = (1.0 - (t * PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cubic_hits_inner_samples_at_endpoints() {
        let (v0, v1, v2, v3) = (0.3, -0.7, 0.25, 0.9);
        assert_eq!(cubic_interpolate(v0, v1, v2, v3, 0.0), v1);
        assert_abs_diff_eq!(cubic_interpolate(v0, v1, v2, v3, 1.0), v2, epsilon = 1e-12);
    }

    #[test]
    fn cubic_is_exact_on_constant_data() {
        for t in [0.0, 0.2, 0.5, 0.8, 1.0] {
            assert_abs_diff_eq!(cubic_interpolate(0.4, 0.4, 0.4, 0.4, t), 0.4, epsilon = 1e-12);
        }
    }

    #[test]
    fn cubic_degenerates_to_linear_ramp() {
        // p = q = 0, r = 1, s = 0
        assert_abs_diff_eq!(cubic_interpolate(0.0, 0.0, 1.0, 1.0, 0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(cubic_interpolate(0.0, 0.0, 1.0, 1.0, 1.5), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn cubic_matches_expanded_polynomial() {
        // p = (2 - 1) - (1 - 3) = 3, q = (1 - 3) - 3 = -5, r = 1 - 1 = 0, s = 3
        let t = 0.25;
        let expected = 3.0 * t * t * t - 5.0 * t * t + 3.0;
        assert_abs_diff_eq!(cubic_interpolate(1.0, 3.0, 1.0, 2.0, t), expected, epsilon = 1e-12);
    }

    #[test]
    fn cosine_endpoints_and_midpoint() {
        assert_abs_diff_eq!(cosine_interpolate(-1.0, 3.0, 0.0), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cosine_interpolate(-1.0, 3.0, 1.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cosine_interpolate(-1.0, 3.0, 0.5), 1.0, epsilon = 1e-12);
    }
}
