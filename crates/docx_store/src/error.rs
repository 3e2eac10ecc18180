//! Error types for DOCX export

use thiserror::Error;

/// Errors that can occur while writing a DOCX package
#[derive(Debug, Error)]
pub enum DocxError {
    /// IO error while writing the archive
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type for DOCX operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;
