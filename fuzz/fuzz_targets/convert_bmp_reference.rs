#![no_main]

// Builds well formed 24-bit BMPs from fuzzed geometry and pixel bytes, then compares the
// converter against a straightforward per-pixel reference implementation.

use bmp_blob::convert_to_vec;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzImage {
    pub width: u8,
    pub height: u8,
    pub top_down: bool,
    pub extra_offset: u8,
    pub pixels: Vec<u8>,
}

fuzz_target!(|image: FuzzImage| {
    let width = image.width as usize % 33;
    let height = image.height as usize % 33;
    let row_size = (width * 3).next_multiple_of(4);
    let offset = 54 + image.extra_offset as usize;

    let mut bmp = vec![0u8; offset];
    bmp[0..2].copy_from_slice(b"BM");
    bmp[0x0A..0x0E].copy_from_slice(&(offset as u32).to_le_bytes());
    bmp[0x0E..0x12].copy_from_slice(&40u32.to_le_bytes());
    bmp[0x12..0x16].copy_from_slice(&(width as i32).to_le_bytes());
    let signed_height = if image.top_down {
        -(height as i32)
    } else {
        height as i32
    };
    bmp[0x16..0x1A].copy_from_slice(&signed_height.to_le_bytes());
    bmp[0x1A..0x1C].copy_from_slice(&1u16.to_le_bytes());
    bmp[0x1C..0x1E].copy_from_slice(&24u16.to_le_bytes());

    // Pixel rows, including padding, cycled from the fuzzed bytes.
    let fill = if image.pixels.is_empty() {
        vec![0u8]
    } else {
        image.pixels.clone()
    };
    bmp.extend(fill.iter().copied().cycle().take(row_size * height));

    let converted = convert_to_vec(&bmp).expect("well formed BMP must convert");
    assert_eq!(converted.pixels(), reference_convert(&bmp, offset, width, height, image.top_down));
});

fn reference_convert(
    bmp: &[u8],
    offset: usize,
    width: usize,
    height: usize,
    top_down: bool,
) -> Vec<u8> {
    let row_size = (width * 3).next_multiple_of(4);
    let mut out = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let src_y = if top_down { y } else { height - 1 - y };
        let row_start = offset + src_y * row_size;
        for x in 0..width {
            let b = bmp[row_start + x * 3];
            let g = bmp[row_start + x * 3 + 1];
            let r = bmp[row_start + x * 3 + 2];
            out.extend_from_slice(&[0, r, g, b]);
        }
    }
    out
}
