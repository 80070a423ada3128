/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a BMP file.
pub mod likely_bmp;

/// Decode and validate the BMP headers.
pub mod parse_bmp;

pub use likely_bmp::*;
pub use parse_bmp::*;
