//! Error types for the paging core.

use thiserror::Error;

/// Errors that can occur while configuring or scanning a source file.
///
/// None of these are fatal: a failed fetch returns no partial page, so
/// the caller keeps whatever it was displaying before.
#[derive(Error, Debug)]
pub enum PagerError {
    /// Source could not be opened or a read failed mid-scan
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File has no header row to parse
    #[error("empty file: no header row")]
    EmptyFile,

    /// Header or record could not be decoded under the active delimiter
    #[error("format error: {0}")]
    Format(String),

    /// Page size must be a positive integer
    #[error("invalid page size: {0}")]
    InvalidPageSize(String),

    /// Delimiter outside the supported set
    #[error("unknown delimiter: {0}")]
    UnknownDelimiter(String),
}

/// Result type alias for pager operations
pub type PagerResult<T> = Result<T, PagerError>;

impl From<csv::Error> for PagerError {
    fn from(err: csv::Error) -> Self {
        // Real I/O failures surface as Io; anything else (bad UTF-8,
        // broken quoting) is a format problem in the file itself.
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => PagerError::Io(io_err),
            _ => PagerError::Format(message),
        }
    }
}
