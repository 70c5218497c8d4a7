//! Error types for grading operations.

use thiserror::Error;

/// Error type for grading operations.
///
/// Only the edges are fallible: buffer shape checks and preset I/O. The
/// per-pixel path never returns an error.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Buffer does not hold whole RGBA pixels.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// I/O error reading or writing a preset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preset could not be parsed or serialized.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for grading operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Checks that an interleaved buffer holds whole RGBA pixels.
pub(crate) fn check_rgba_len(len: usize) -> OpsResult<()> {
    if len % 4 != 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "buffer of {} floats is not a whole number of RGBA pixels",
            len
        )));
    }
    Ok(())
}
