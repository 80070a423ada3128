//! Conversion of validated BMP images into `[0, R, G, B]` pixel blobs.
//!
//! All entry points validate the whole input with [`parse_bmp`] before writing anything,
//! so a failed conversion never leaves a partially written output.

use crate::bmp::{parse_bmp, BmpInfo};
use crate::error::{ConvertError, ConvertResult};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

mod reorder;
pub use reorder::bgr_row_to_0rgb;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Width as declared in the header, which may be negative.
    pub width: i32,
    pub height: u32,
    pub bytes_written: usize,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}, wrote {} bytes",
            self.width, self.height, self.bytes_written
        )
    }
}

/// A converted image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedImage {
    /// Pixels per row.
    pub width: u32,
    pub height: u32,
    declared_width: i32,
    pixels: Vec<u8>,
}

impl ConvertedImage {
    /// The `[0, R, G, B]` blob, top row first.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn summary(&self) -> ConversionSummary {
        ConversionSummary {
            width: self.declared_width,
            height: self.height,
            bytes_written: self.pixels.len(),
        }
    }
}

impl From<&BmpInfo> for ConversionSummary {
    fn from(info: &BmpInfo) -> Self {
        Self {
            width: info.declared_width,
            height: info.height,
            bytes_written: info.output_len,
        }
    }
}

/// Returns the size of the blob [`convert_slice`] would produce for `input`.
///
/// Validates the input fully; use this to size the output buffer up front.
pub fn required_output_size(input: &[u8]) -> ConvertResult<usize> {
    parse_bmp(input).map(|info| info.output_len)
}

/// Converts a BMP file held in memory into a caller-provided buffer.
///
/// Only the first `width * height * 4` bytes of `output` are written; any remainder is left
/// untouched.
///
/// # Errors
///
/// Any error from [`parse_bmp`], or [`ConvertError::OutputBufferTooSmall`] if `output` cannot
/// hold the blob. In both cases `output` is not modified.
pub fn convert_slice(input: &[u8], output: &mut [u8]) -> ConvertResult<ConversionSummary> {
    let info = parse_bmp(input)?;
    if output.len() < info.output_len {
        return Err(ConvertError::OutputBufferTooSmall {
            required: info.output_len,
            actual: output.len(),
        });
    }

    transfer_pixels(input, &info, &mut output[..info.output_len]);
    Ok(ConversionSummary::from(&info))
}

/// Converts a BMP file held in memory into a newly allocated blob.
pub fn convert_to_vec(input: &[u8]) -> ConvertResult<ConvertedImage> {
    let info = parse_bmp(input)?;
    let mut pixels = vec![0u8; info.output_len];
    transfer_pixels(input, &info, &mut pixels);

    Ok(ConvertedImage {
        width: info.width,
        height: info.height,
        declared_width: info.declared_width,
        pixels,
    })
}

/// Walks the destination rows top to bottom, pulling each from its stored row.
///
/// `info` must come from [`parse_bmp`] on `input`, and `output` must be exactly
/// `info.output_len` bytes long.
pub(crate) fn transfer_pixels(input: &[u8], info: &BmpInfo, output: &mut [u8]) {
    let out_row_len = info.output_row_len();
    if out_row_len == 0 {
        return;
    }

    for (y, out_row) in output.chunks_exact_mut(out_row_len).enumerate() {
        // In bounds: parse_bmp checked required_input_len against input.len().
        let src_row = &input[info.source_row_range(y)];
        bgr_row_to_0rgb(src_row, out_row);
    }
}
