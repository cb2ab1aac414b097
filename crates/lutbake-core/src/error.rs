//! Error types for LUT baking operations.
//!
//! All failure modes across the lutbake crates share this one taxonomy so
//! that callers can branch on the error kind rather than on message text.

use crate::preset::LutType;
use thiserror::Error;

/// Result type for LUT baking operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while sampling or writing a LUT.
#[derive(Debug, Error)]
pub enum LutError {
    /// Preset dimensionality is incompatible with the requested sampling
    /// operation (e.g. a 3D preset handed to the 1D/2D sampler).
    #[error("preset not valid for {expected} sampling (preset is {found})")]
    PresetMismatch {
        /// Dimensionalities the operation accepts, e.g. "1D/2D".
        expected: &'static str,
        /// Dimensionality the preset declares.
        found: LutType,
    },

    /// The format writer structurally cannot encode the requested
    /// dimensionality (e.g. a cube-only format asked for a 1D LUT).
    #[error("{format} format cannot encode {lut_type} LUTs")]
    UnsupportedDimensionality {
        /// Short name of the format writer.
        format: &'static str,
        /// Dimensionality that was requested.
        lut_type: LutType,
    },

    /// Malformed preset: missing or mismatched resolution, out-of-domain
    /// bit depth or cube size, degenerate range.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// Sampling was aborted by a progress callback.
    #[error("sampling cancelled after {done} of {total} samples")]
    Cancelled {
        /// Samples produced before cancellation.
        done: usize,
        /// Total samples the operation would have produced.
        total: usize,
    },

    /// I/O error while persisting an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
