use bmp_blob::FileOperationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments; holds the usage line.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    FileOperation(#[from] FileOperationError),
}
