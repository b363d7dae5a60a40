//! Deterministic 1-D value noise for animation drivers.
//!
//! ```
//! use evonoise_core::PerlinNoise1D;
//!
//! let noise = PerlinNoise1D::default();
//! let v = noise.evaluate(2.0, 0.5, 3);
//! assert_eq!(v, noise.evaluate(2.0, 0.5, 3));
//! ```
pub mod error;
pub mod noise;
pub mod sampling;

pub use error::ParamsError;
pub use noise::params::NoiseParams;
pub use noise::table::NoiseTable;
pub use noise::PerlinNoise1D;
