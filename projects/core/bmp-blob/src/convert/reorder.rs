use crate::bmp::constants::{OUTPUT_BYTES_PER_PIXEL, SOURCE_BYTES_PER_PIXEL};

/// Reorders a row of packed `B, G, R` pixels into `0, R, G, B` pixels.
///
/// Converts `min(src.len() / 3, dst.len() / 4)` pixels; trailing partial pixels are ignored.
///
/// # Parameters
///
/// - `src`: Source pixels, 3 bytes each, as stored in a 24-bit BMP row (without padding).
/// - `dst`: Destination pixels, 4 bytes each.
#[inline]
pub fn bgr_row_to_0rgb(src: &[u8], dst: &mut [u8]) {
    for (bgr, out) in src
        .chunks_exact(SOURCE_BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(OUTPUT_BYTES_PER_PIXEL))
    {
        out[0] = 0;
        out[1] = bgr[2];
        out[2] = bgr[1];
        out[3] = bgr[0];
    }
}
