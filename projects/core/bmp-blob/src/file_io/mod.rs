//! File I/O operations for BMP conversion.
//!
//! This module provides memory-mapped file operations using `lightweight-mmap`.
//! The input is validated completely before the output file is created.

mod error;
pub use error::*;

mod lightweight_mmap_impl;

// Public API lives in there.
// If adding alternative implementation, you need to swap it out.
pub use lightweight_mmap_impl::*;
