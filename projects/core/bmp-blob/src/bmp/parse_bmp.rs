use super::{constants::*, likely_bmp};
use crate::error::{ConvertError, ConvertResult};
use core::ops::Range;
use log::debug;

const NOT_A_BMP: ConvertError = ConvertError::InvalidFormat("not a BMP");
const TRUNCATED_HEADER: ConvertError = ConvertError::InvalidFormat("truncated header");
const TRUNCATED_PIXEL_DATA: ConvertError = ConvertError::InvalidFormat("truncated pixel data");
const IMAGE_TOO_LARGE: ConvertError = ConvertError::UnsupportedFormat("image too large");
const UNSUPPORTED_DIB_HEADER: ConvertError =
    ConvertError::UnsupportedFormat("unsupported DIB header");

/// Order in which the rows of the image are stored in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// First stored row is the bottom of the image. Positive height, the BMP default.
    BottomUp,
    /// First stored row is the top of the image. Negative height.
    TopDown,
}

impl RowOrder {
    /// Determines the row order from the signed height field.
    #[inline]
    pub fn from_height(height: i32) -> Self {
        if height < 0 {
            Self::TopDown
        } else {
            Self::BottomUp
        }
    }

    /// Returns the stored row index holding destination row `y` of an image `height` rows tall.
    ///
    /// `y` must be less than `height`.
    #[inline]
    pub fn source_row(self, y: usize, height: usize) -> usize {
        match self {
            Self::BottomUp => height - 1 - y,
            Self::TopDown => y,
        }
    }
}

/// Raw header fields of a BMP file, decoded from their fixed byte offsets.
///
/// Only the BITMAPFILEHEADER and the first 40 bytes of the DIB header are read;
/// larger DIB headers (V4, V5) share that prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub signature: [u8; 2],
    pub pixel_data_offset: u32,
    pub dib_header_size: u32,
    pub width: i32,
    /// Signed, the sign selects the [`RowOrder`].
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
}

/// Validated geometry of a 24-bit BMP image; everything needed to walk its pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfo {
    /// Width as stored in the header. A negative width describes rows without pixels.
    pub declared_width: i32,
    /// Pixels per row; zero when the declared width is negative.
    pub width: u32,
    /// Absolute height, regardless of row order.
    pub height: u32,
    pub row_order: RowOrder,
    /// Offset of the first stored pixel row from the start of the file.
    pub pixel_data_offset: usize,
    /// Length of a stored row including its padding.
    pub row_size: usize,
    /// Size of the converted blob in bytes.
    pub output_len: usize,
    /// Minimum input length required to read every pixel.
    pub required_input_len: usize,
}

impl BmpHeader {
    /// Decodes the header fields at their fixed offsets.
    ///
    /// No field is validated here, see [`BmpHeader::validate`].
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidFormat`] if the data is too short to contain the fields.
    pub fn read(data: &[u8]) -> ConvertResult<Self> {
        let signature: [u8; 2] = data
            .get(..BMP_MAGIC.len())
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(TRUNCATED_HEADER)?;

        Ok(Self {
            signature,
            pixel_data_offset: read_u32_at(data, PIXEL_DATA_OFFSET_OFFSET)?,
            dib_header_size: read_u32_at(data, DIB_HEADER_SIZE_OFFSET)?,
            width: read_i32_at(data, WIDTH_OFFSET)?,
            height: read_i32_at(data, HEIGHT_OFFSET)?,
            planes: read_u16_at(data, PLANES_OFFSET)?,
            bits_per_pixel: read_u16_at(data, BITS_PER_PIXEL_OFFSET)?,
            compression: read_u32_at(data, COMPRESSION_OFFSET)?,
        })
    }

    /// Validates the header and derives the image geometry.
    ///
    /// Checks run in a fixed order and the first failing one is reported:
    /// signature, DIB header size, planes, bit depth, compression, size.
    pub fn validate(&self) -> ConvertResult<BmpInfo> {
        if &self.signature != BMP_MAGIC {
            return Err(NOT_A_BMP);
        }
        if self.dib_header_size < BITMAPINFOHEADER_SIZE {
            return Err(UNSUPPORTED_DIB_HEADER);
        }
        if self.planes != REQUIRED_PLANES {
            return Err(ConvertError::InvalidFormat("invalid planes"));
        }
        if self.bits_per_pixel != REQUIRED_BITS_PER_PIXEL {
            return Err(ConvertError::UnsupportedFormat("only 24-bit BMP supported"));
        }
        if self.compression != BI_RGB {
            return Err(ConvertError::UnsupportedFormat(
                "compressed BMP not supported",
            ));
        }

        let width = u32::try_from(self.width).unwrap_or(0);
        let height = self.height.unsigned_abs();
        let row_order = RowOrder::from_height(self.height);

        let width_px = usize::try_from(width).map_err(|_| IMAGE_TOO_LARGE)?;
        let height_px = usize::try_from(height).map_err(|_| IMAGE_TOO_LARGE)?;
        let pixel_data_offset =
            usize::try_from(self.pixel_data_offset).map_err(|_| IMAGE_TOO_LARGE)?;

        let row_bytes = width_px
            .checked_mul(SOURCE_BYTES_PER_PIXEL)
            .ok_or(IMAGE_TOO_LARGE)?;
        let row_size = row_bytes
            .checked_next_multiple_of(ROW_ALIGNMENT)
            .ok_or(IMAGE_TOO_LARGE)?;
        let output_len = width_px
            .checked_mul(height_px)
            .and_then(|pixels| pixels.checked_mul(OUTPUT_BYTES_PER_PIXEL))
            .ok_or(IMAGE_TOO_LARGE)?;

        // The last row needs no padding after it, only its pixels.
        let required_input_len = if output_len == 0 {
            0
        } else {
            (height_px - 1)
                .checked_mul(row_size)
                .and_then(|rows| rows.checked_add(row_bytes))
                .and_then(|len| len.checked_add(pixel_data_offset))
                .ok_or(IMAGE_TOO_LARGE)?
        };

        Ok(BmpInfo {
            declared_width: self.width,
            width,
            height,
            row_order,
            pixel_data_offset,
            row_size,
            output_len,
            required_input_len,
        })
    }
}

impl BmpInfo {
    /// Byte range of the pixels (without padding) feeding destination row `y`.
    ///
    /// `y` must be less than the image height.
    #[inline]
    pub fn source_row_range(&self, y: usize) -> Range<usize> {
        let src_y = self.row_order.source_row(y, self.height as usize);
        let start = self.pixel_data_offset + src_y * self.row_size;
        start..start + self.width as usize * SOURCE_BYTES_PER_PIXEL
    }

    /// Length of one converted row in the output blob.
    #[inline]
    pub fn output_row_len(&self) -> usize {
        self.width as usize * OUTPUT_BYTES_PER_PIXEL
    }
}

/// Parses and validates a BMP file held entirely in memory.
///
/// # Return
///
/// A [`BmpInfo`] describing an image whose pixel rows are all present in `data`.
///
/// # Errors
///
/// - [`ConvertError::InvalidFormat`] for a missing signature, a truncated header,
///   a plane count other than 1 or truncated pixel data.
/// - [`ConvertError::UnsupportedFormat`] for DIB headers smaller than 40 bytes, bit depths
///   other than 24, compressed images or dimensions that do not fit in memory.
pub fn parse_bmp(data: &[u8]) -> ConvertResult<BmpInfo> {
    if !likely_bmp(data) {
        return Err(NOT_A_BMP);
    }

    // The DIB header size decides how the rest of the header is laid out, so it is checked
    // before the remaining fields are read.
    if read_u32_at(data, DIB_HEADER_SIZE_OFFSET)? < BITMAPINFOHEADER_SIZE {
        return Err(UNSUPPORTED_DIB_HEADER);
    }

    let info = BmpHeader::read(data)?.validate()?;
    if data.len() < info.required_input_len {
        return Err(TRUNCATED_PIXEL_DATA);
    }

    debug!(
        "Parsed BMP header: width={}, height={}, order={:?}, offset={}, row_size={}",
        info.width, info.height, info.row_order, info.pixel_data_offset, info.row_size
    );
    Ok(info)
}

#[inline]
fn read_bytes_at<const N: usize>(data: &[u8], offset: usize) -> ConvertResult<[u8; N]> {
    data.get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(TRUNCATED_HEADER)
}

#[inline]
fn read_u16_at(data: &[u8], offset: usize) -> ConvertResult<u16> {
    read_bytes_at(data, offset).map(u16::from_le_bytes)
}

#[inline]
fn read_u32_at(data: &[u8], offset: usize) -> ConvertResult<u32> {
    read_bytes_at(data, offset).map(u32::from_le_bytes)
}

#[inline]
fn read_i32_at(data: &[u8], offset: usize) -> ConvertResult<i32> {
    read_bytes_at(data, offset).map(i32::from_le_bytes)
}
