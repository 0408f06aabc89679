//! Error types for rigview.

use thiserror::Error;

/// The main error type for rigview operations.
#[derive(Error, Debug)]
pub enum RigError {
    /// A layout, intrinsics or target parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A camera pose has no usable look direction.
    #[error("invalid pose: {0}")]
    InvalidPose(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for rigview operations.
pub type Result<T> = std::result::Result<T, RigError>;

/// Fails with [`RigError::InvalidParameter`] unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RigError::InvalidParameter(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Fails with [`RigError::InvalidParameter`] unless `value` is finite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RigError::InvalidParameter(format!("{name} must be finite, got {value}")))
    }
}
