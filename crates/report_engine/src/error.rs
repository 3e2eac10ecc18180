//! Error types for report generation

use thiserror::Error;

/// Failures that reach the caller of [`crate::generate_report`]
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request failed structural validation
    #[error(transparent)]
    Record(#[from] eval_record::RecordError),

    /// The DOCX package could not be written
    #[error(transparent)]
    Docx(#[from] docx_store::DocxError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
