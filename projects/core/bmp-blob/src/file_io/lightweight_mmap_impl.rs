//! File I/O implementation using lightweight-mmap.

use crate::bmp::parse_bmp;
use crate::convert::{convert_to_vec, transfer_pixels, ConversionSummary, ConvertedImage};
use crate::file_io::FileOperationResult;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use log::info;
use std::fs::{self, File};
use std::path::Path;

/// Convert a BMP file into a raw `[0, R, G, B]` blob file.
///
/// This function memory-maps the input file, validates it completely, then creates the output
/// file at its final size and converts directly into its mapping. Nothing is created at
/// `output_path` if the input is rejected.
///
/// When both paths name the same file, the input is read into memory first, since creating the
/// output truncates it.
///
/// # Arguments
///
/// * `input_path` - Path to the input BMP file
/// * `output_path` - Path to the output file (will be created or truncated). The output directory must exist.
///
/// # Returns
///
/// A [`ConversionSummary`] on success.
///
/// # Example
///
/// ```no_run
/// use bmp_blob::file_io::{convert_file, FileOperationResult};
/// use std::path::Path;
///
/// fn example_convert_file(input_path: &Path, output_path: &Path) -> FileOperationResult<()> {
///     let summary = convert_file(input_path, output_path)?;
///     println!("ok: {summary}");
///     Ok(())
/// }
/// ```
pub fn convert_file(input_path: &Path, output_path: &Path) -> FileOperationResult<ConversionSummary> {
    let summary = if is_same_file(input_path, output_path)? {
        let input = fs::read(input_path)?;
        convert_mapped(&input, output_path)?
    } else {
        convert_file_mapped(input_path, output_path)?
    };

    info!(
        "Converted {} -> {} ({summary})",
        input_path.display(),
        output_path.display()
    );
    Ok(summary)
}

fn convert_file_mapped(input_path: &Path, output_path: &Path) -> FileOperationResult<ConversionSummary> {
    let input_handle = ReadOnlyFileHandle::open(input_path)?;
    let input_size = input_handle.size()? as usize;

    // Empty files cannot be mapped; they fail validation all the same.
    if input_size == 0 {
        convert_mapped(&[], output_path)
    } else {
        let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
        convert_mapped(input_mapping.as_slice(), output_path)
    }
}

/// Whether `output_path` already exists and refers to the same file as `input_path`.
fn is_same_file(input_path: &Path, output_path: &Path) -> std::io::Result<bool> {
    let Ok(output_metadata) = fs::metadata(output_path) else {
        return Ok(false);
    };
    let input_metadata = fs::metadata(input_path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        Ok(input_metadata.dev() == output_metadata.dev()
            && input_metadata.ino() == output_metadata.ino())
    }
    #[cfg(not(unix))]
    {
        let _ = (input_metadata, output_metadata);
        Ok(fs::canonicalize(input_path)? == fs::canonicalize(output_path)?)
    }
}

/// Convert a BMP file into an in-memory blob.
///
/// # Arguments
///
/// * `input_path` - Path to the input BMP file
///
/// # Returns
///
/// The converted image on success.
pub fn convert_file_to_vec(input_path: &Path) -> FileOperationResult<ConvertedImage> {
    let input_handle = ReadOnlyFileHandle::open(input_path)?;
    let input_size = input_handle.size()? as usize;
    if input_size == 0 {
        return Ok(convert_to_vec(&[])?);
    }

    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
    Ok(convert_to_vec(input_mapping.as_slice())?)
}

fn convert_mapped(input: &[u8], output_path: &Path) -> FileOperationResult<ConversionSummary> {
    let info = parse_bmp(input)?;

    if info.output_len == 0 {
        // Zero-length mappings are not allowed; an empty blob is just an empty file.
        File::create(output_path)?;
    } else {
        let output_handle =
            ReadWriteFileHandle::create_preallocated(output_path, info.output_len as i64)?;
        let mut output_mapping = ReadWriteMmap::new(&output_handle, 0, info.output_len)?;
        transfer_pixels(input, &info, output_mapping.as_mut_slice());
    }

    Ok(ConversionSummary::from(&info))
}
