//! BMP format constants and definitions

/// Signature at the start of every BMP file.
pub const BMP_MAGIC: &[u8; 2] = b"BM";

// BITMAPFILEHEADER field offsets
pub(crate) const PIXEL_DATA_OFFSET_OFFSET: usize = 0x0A;

// BITMAPINFOHEADER field offsets
pub(crate) const DIB_HEADER_SIZE_OFFSET: usize = 0x0E;
pub(crate) const WIDTH_OFFSET: usize = 0x12;
pub(crate) const HEIGHT_OFFSET: usize = 0x16;
pub(crate) const PLANES_OFFSET: usize = 0x1A;
pub(crate) const BITS_PER_PIXEL_OFFSET: usize = 0x1C;
pub(crate) const COMPRESSION_OFFSET: usize = 0x1E;

/// Number of leading bytes that must be present to read every header field we use.
pub const BMP_HEADER_READ_SIZE: usize = COMPRESSION_OFFSET + 4;

/// Size of the BITMAPFILEHEADER.
pub const BMP_FILE_HEADER_SIZE: usize = 14;

/// Size of the BITMAPINFOHEADER; smallest DIB header we accept.
pub const BITMAPINFOHEADER_SIZE: u32 = 40;

pub(crate) const REQUIRED_PLANES: u16 = 1;
pub(crate) const REQUIRED_BITS_PER_PIXEL: u16 = 24;

/// BI_RGB, uncompressed pixel data.
pub(crate) const BI_RGB: u32 = 0;

/// Bytes per pixel in the source rows (B, G, R).
pub const SOURCE_BYTES_PER_PIXEL: usize = 3;

/// Bytes per pixel in the output blob (0, R, G, B).
pub const OUTPUT_BYTES_PER_PIXEL: usize = 4;

/// Source rows are padded to a multiple of this many bytes.
pub(crate) const ROW_ALIGNMENT: usize = 4;
