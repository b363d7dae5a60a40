use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

/// Largest octave count accepted by [`NoiseParams::validate`].
/// A sanity bound for callers that validate; the evaluator accepts any count.
pub const MAX_OCTAVES: i32 = 62;

/// Per-call input to the 1-D noise evaluator.
/// Missing JSON fields fall back to [`NoiseParams::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Evolution coordinate along the noise curve.
    pub position: f64,
    /// Amplitude factor applied per octave (amplitude_i = persistence^i).
    pub persistence: f64,
    /// Number of summed layers; ≤ 0 evaluates to 0.
    pub octaves: i32,
    /// Per-instance seed carried for callers. Not read by the evaluator.
    pub additional_seed: i64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            position: 0.0,
            persistence: 0.5,
            octaves: 3,
            additional_seed: 0,
        }
    }
}

impl NoiseParams {
    pub fn new(position: f64, persistence: f64, octaves: i32) -> Self {
        Self { position, persistence, octaves, ..Self::default() }
    }

    /// Parse a parameter set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject non-finite inputs and octave counts above [`MAX_OCTAVES`].
    ///
    /// Optional: the evaluator accepts anything, and NaN or infinite inputs
    /// simply propagate through the arithmetic.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.position.is_finite() {
            return Err(ParamsError::NonFinite { field: "position", value: self.position });
        }
        if !self.persistence.is_finite() {
            return Err(ParamsError::NonFinite { field: "persistence", value: self.persistence });
        }
        if self.octaves > MAX_OCTAVES {
            return Err(ParamsError::OctavesOutOfRange { octaves: self.octaves, max: MAX_OCTAVES });
        }
        Ok(())
    }
}
