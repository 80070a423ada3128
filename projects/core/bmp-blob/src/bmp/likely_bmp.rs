use super::constants::*;

/// Determines if the given data likely represents a BMP image.
/// This only checks the 'BM' signature at offset 0.
/// For full header validation, use [`parse_bmp`].
///
/// [`parse_bmp`]: crate::bmp::parse_bmp::parse_bmp
#[inline(always)]
pub fn likely_bmp(data: &[u8]) -> bool {
    data.get(..BMP_MAGIC.len()) == Some(BMP_MAGIC.as_slice())
}
