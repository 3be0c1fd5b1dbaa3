//! Error types for the unresume library.

use std::io;
use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during resume processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is neither a PDF nor a supported image format.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Native PDF text extraction failed.
    #[error("PDF text extraction error: {0}")]
    PdfText(#[from] pdf_extract::OutputError),

    /// Rendering a PDF page to an image failed.
    #[error("Page render error: {0}")]
    PageRender(String),

    /// The OCR engine failed or produced no usable output.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// The named-entity tagger failed on a line.
    #[error("NER error: {0}")]
    Ner(String),

    /// The embedding provider failed on a batch.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// The skill vocabulary file is present but malformed.
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
