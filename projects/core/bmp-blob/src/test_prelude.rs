//! Common test imports and utilities for BMP tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::bmp::constants::*;

/// Value written into row padding bytes, so leaking padding into the output is detectable.
pub const PADDING_BYTE: u8 = 0xAA;

/// Deterministic, distinct RGB color for the pixel at column `x` of stored row `row`.
pub fn stored_color(x: usize, row: usize) -> [u8; 3] {
    [
        (x * 37 + row * 11 + 1) as u8,
        (x * 13 + row * 59 + 2) as u8,
        (x * 71 + row * 5 + 3) as u8,
    ]
}

/// Builds synthetic BMP files with a BITMAPINFOHEADER.
///
/// Pixels come from a per-stored-row generator returning `[r, g, b]`;
/// they are written to the file in B, G, R order with [`PADDING_BYTE`] padding.
#[derive(Clone)]
pub struct BmpBuilder {
    signature: [u8; 2],
    width: i32,
    height: i32,
    dib_header_size: u32,
    planes: u16,
    bits_per_pixel: u16,
    compression: u32,
    pixel_data_offset: u32,
    write_pixels: bool,
    stored_pixel: fn(usize, usize) -> [u8; 3],
}

impl core::fmt::Debug for BmpBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BmpBuilder")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl BmpBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            signature: *BMP_MAGIC,
            width,
            height,
            dib_header_size: BITMAPINFOHEADER_SIZE,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            pixel_data_offset: (BMP_FILE_HEADER_SIZE as u32) + BITMAPINFOHEADER_SIZE,
            write_pixels: true,
            stored_pixel: stored_color,
        }
    }

    pub fn signature(mut self, signature: [u8; 2]) -> Self {
        self.signature = signature;
        self
    }

    pub fn dib_header_size(mut self, size: u32) -> Self {
        self.dib_header_size = size;
        self
    }

    pub fn planes(mut self, planes: u16) -> Self {
        self.planes = planes;
        self
    }

    pub fn bits_per_pixel(mut self, bits_per_pixel: u16) -> Self {
        self.bits_per_pixel = bits_per_pixel;
        self
    }

    pub fn compression(mut self, compression: u32) -> Self {
        self.compression = compression;
        self
    }

    pub fn pixel_data_offset(mut self, offset: u32) -> Self {
        self.pixel_data_offset = offset;
        self
    }

    /// Sets the color generator, called with `(x, stored_row)` and returning `[r, g, b]`.
    pub fn stored_pixels(mut self, generator: fn(usize, usize) -> [u8; 3]) -> Self {
        self.stored_pixel = generator;
        self
    }

    /// Emits only the headers, no pixel rows.
    pub fn no_pixels(mut self) -> Self {
        self.write_pixels = false;
        self
    }

    /// Row length in the file, including padding.
    pub fn row_size(&self) -> usize {
        (self.width.max(0) as usize * 3).next_multiple_of(4)
    }

    pub fn build(&self) -> Vec<u8> {
        let header_end = BMP_FILE_HEADER_SIZE + BITMAPINFOHEADER_SIZE as usize;
        let mut data = vec![0u8; header_end.max(self.pixel_data_offset as usize)];

        data[0..2].copy_from_slice(&self.signature);
        write_at(&mut data, 0x0A, &self.pixel_data_offset.to_le_bytes());
        write_at(&mut data, 0x0E, &self.dib_header_size.to_le_bytes());
        write_at(&mut data, 0x12, &self.width.to_le_bytes());
        write_at(&mut data, 0x16, &self.height.to_le_bytes());
        write_at(&mut data, 0x1A, &self.planes.to_le_bytes());
        write_at(&mut data, 0x1C, &self.bits_per_pixel.to_le_bytes());
        write_at(&mut data, 0x1E, &self.compression.to_le_bytes());

        if !self.write_pixels {
            return data;
        }

        data.truncate(self.pixel_data_offset as usize);
        let width = self.width.max(0) as usize;
        let rows = self.height.unsigned_abs() as usize;
        for row in 0..rows {
            for x in 0..width {
                let [r, g, b] = (self.stored_pixel)(x, row);
                data.extend_from_slice(&[b, g, r]);
            }
            data.resize(data.len() + self.row_size() - width * 3, PADDING_BYTE);
        }
        data
    }
}

fn write_at(data: &mut [u8], offset: usize, bytes: &[u8]) {
    data[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// Reads the `[0, r, g, b]` pixel at `(x, y)` from a converted blob of the given width.
pub fn blob_pixel(blob: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let start = (y * width + x) * 4;
    blob[start..start + 4].try_into().unwrap()
}
