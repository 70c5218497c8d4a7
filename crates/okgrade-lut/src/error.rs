//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building a hue-curve table.
#[derive(Debug, Error)]
pub enum LutError {
    /// Table has fewer than two entries.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Flat buffer length is not a whole number of RGBA entries.
    #[error("buffer of {len} floats is not a whole number of {channels}-channel entries")]
    ChannelMismatch {
        /// Buffer length in floats
        len: usize,
        /// Channels per entry
        channels: usize,
    },
}
