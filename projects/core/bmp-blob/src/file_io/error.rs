//! Error types for file I/O operations.

use crate::error::ConvertError;
use thiserror::Error;

/// Result type for file operations
pub type FileOperationResult<T> = Result<T, FileOperationError>;

/// Errors that can occur during file operations.
///
/// File operations can fail due to either I/O errors (file not found, permission denied, etc.)
/// or conversion errors (invalid header, unsupported format, etc.).
/// Both display the underlying message unchanged.
#[derive(Debug, Error)]
pub enum FileOperationError {
    /// I/O operation failed
    #[error(transparent)]
    Io(#[from] FileIoError),

    /// Conversion failed
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Specific backend-related errors that can occur during file I/O operations.
#[derive(Debug, Error)]
pub enum LightweightMmapError {
    /// Error opening file handle
    #[error(transparent)]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error(transparent)]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

/// File I/O errors that can occur with different backends
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error from lightweight-mmap backend
    #[error(transparent)]
    LightweightMmap(#[from] LightweightMmapError),

    /// Error from std I/O operations
    #[error(transparent)]
    Std(#[from] std::io::Error),
}

// Direct From implementations for specific error types used with ? operator in file operations
impl From<lightweight_mmap::handles::HandleOpenError> for FileOperationError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::Io(FileIoError::LightweightMmap(
            LightweightMmapError::FileHandle(e),
        ))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for FileOperationError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::Io(FileIoError::LightweightMmap(
            LightweightMmapError::MemoryMapping(e),
        ))
    }
}

impl From<std::io::Error> for FileOperationError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(FileIoError::Std(e))
    }
}

impl FileOperationError {
    /// The conversion error, if the failure came from the image contents rather than I/O.
    pub fn as_convert_error(&self) -> Option<&ConvertError> {
        match self {
            Self::Convert(e) => Some(e),
            Self::Io(_) => None,
        }
    }
}
