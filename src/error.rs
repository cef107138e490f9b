//! Error types for plandoc.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type alias for plandoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing, generating or assembling documents.
#[derive(Error, Debug)]
pub enum Error {
    /// The source is missing, unreadable, or not a valid .docx package.
    #[error("failed to read document {path}: {reason}")]
    DocumentRead { path: String, reason: String },

    /// A template upload that is not a .docx file.
    #[error("only .docx files can be uploaded as templates (got {0})")]
    UnsupportedUpload(String),

    /// The generative-text backend failed.
    #[error("generation backend error: {0}")]
    Backend(String),

    /// No extraction path exists for this reference file type.
    #[error("unsupported reference format: {0}")]
    UnsupportedFormat(String),

    /// The assembled package could not be serialized.
    #[error("failed to write document package: {0}")]
    Package(String),

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn document_read(path: &Path, reason: impl ToString) -> Self {
        Error::DocumentRead {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
