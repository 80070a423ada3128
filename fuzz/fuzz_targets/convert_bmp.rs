#![no_main]

// Feeds arbitrary bytes to the converter. It must never panic, and every accepted
// input must produce exactly width * height * 4 bytes with a zero first byte per pixel.

use bmp_blob::{convert_slice, convert_to_vec, parse_bmp, ConvertError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(info) = parse_bmp(data) else {
        assert!(convert_to_vec(data).is_err());
        return;
    };

    // Skip dimensions that would make the fuzzer allocate gigabytes.
    if info.output_len > 64 * 1024 * 1024 {
        return;
    }

    let image = convert_to_vec(data).expect("parse_bmp accepted the input");
    assert_eq!(
        image.pixels().len(),
        info.width as usize * info.height as usize * 4
    );
    assert!(image.pixels().chunks_exact(4).all(|pixel| pixel[0] == 0));

    // A buffer one byte short must be rejected untouched.
    if let Some(short_len) = info.output_len.checked_sub(1) {
        let mut short = vec![0xAAu8; short_len];
        assert_eq!(
            convert_slice(data, &mut short),
            Err(ConvertError::OutputBufferTooSmall {
                required: info.output_len,
                actual: short_len,
            })
        );
        assert!(short.iter().all(|&b| b == 0xAA));
    }
});
