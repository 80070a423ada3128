//! Converts uncompressed 24-bit Windows BMP images into raw pixel blobs.
//!
//! The output layout is 4 bytes per pixel, `[0, R, G, B]`, row-major with the top row first,
//! suitable for copying straight into a framebuffer or texture memory.
//!
//! # Features
//!
//! - Fixed-offset BMP header parsing and validation
//! - Bottom-up and top-down row order
//! - Conversion into caller-provided buffers, owned vectors or files
//! - Memory-mapped file support for efficient I/O
//!
//! # Example
//!
//! ```
//! use bmp_blob::{convert_to_vec, ConvertResult};
//!
//! fn example_convert(input: &[u8]) -> ConvertResult<Vec<u8>> {
//!     let image = convert_to_vec(input)?;
//!     println!("ok: {}", image.summary());
//!     Ok(image.into_pixels())
//! }
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

/// BMP header layout, detection and parsing.
pub mod bmp;

/// Pixel transfer from BMP rows into the output blob.
pub mod convert;

pub mod error;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
mod test_prelude;

// Re-export key types
pub use bmp::{likely_bmp, parse_bmp, BmpHeader, BmpInfo, RowOrder};
pub use convert::{convert_slice, convert_to_vec, ConversionSummary, ConvertedImage};
pub use error::{ConvertError, ConvertResult};

// Re-export file operation types when file-io feature is enabled
#[cfg(feature = "file-io")]
pub use file_io::{convert_file, FileOperationError, FileOperationResult};
