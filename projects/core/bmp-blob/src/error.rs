//! Error types for BMP conversion.

use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while parsing or converting a BMP image.
///
/// The message of the format variants is the complete user-facing diagnostic,
/// e.g. `not a BMP`, so it is displayed without any prefix.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The input is not a well formed BMP file (bad signature, invalid planes, truncated data).
    #[error("{0}")]
    InvalidFormat(&'static str),

    /// The input is a BMP file, but uses a feature this converter does not handle
    /// (old DIB header, bit depth other than 24, compression).
    #[error("{0}")]
    UnsupportedFormat(&'static str),

    /// Output buffer is too small to hold the converted blob
    #[error("Output buffer too small: required {required} bytes, got {actual} bytes")]
    OutputBufferTooSmall { required: usize, actual: usize },
}
