//! Error types for imagefx-math

use thiserror::Error;

/// Errors that can occur during pixel arithmetic operations
#[derive(Debug, Error)]
pub enum MathError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imagefx_core::Error),

    /// Source images have different dimensions
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Result image is too small for the source extent
    #[error("result image too small: need {}x{}, got {}x{}", .required.0, .required.1, .actual.0, .actual.1)]
    ResultTooSmall {
        required: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for pixel arithmetic operations
pub type MathResult<T> = Result<T, MathError>;
