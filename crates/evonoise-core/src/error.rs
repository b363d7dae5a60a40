use thiserror::Error;

/// Rejections produced by [`NoiseParams::validate`](crate::noise::params::NoiseParams::validate)
/// and [`NoiseParams::from_json`](crate::noise::params::NoiseParams::from_json).
///
/// The evaluator itself accepts every input and never returns these.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("octave count {octaves} exceeds the maximum of {max}")]
    OctavesOutOfRange { octaves: i32, max: i32 },

    #[error("invalid noise parameters JSON: {0}")]
    Json(#[from] serde_json::Error),
}
