//! Reference-document ingestion
//!
//! Reference material is best-effort: plain text and .docx files are read,
//! anything else is replaced by a placeholder instead of failing.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::document::{parse_upload, plain_text};
use crate::error::{Error, Result};

pub const UNSUPPORTED_PLACEHOLDER: &str = "지원되지 않는 파일 형식";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Text,
    Docx,
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    pub filename: String,
    pub content: String,
    pub document_type: ReferenceKind,
}

fn reference_kind(filename: &str) -> ReferenceKind {
    match Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("txt") => ReferenceKind::Text,
        Some("docx") => ReferenceKind::Docx,
        _ => ReferenceKind::Unsupported,
    }
}

/// Extract the full text of a reference file.
///
/// Fails with `UnsupportedFormat` for file types without an extraction path.
pub fn extract_reference_text(filename: &str, bytes: &[u8]) -> Result<String> {
    match reference_kind(filename) {
        ReferenceKind::Text => String::from_utf8(bytes.to_vec()).map_err(|e| {
            Error::DocumentRead {
                path: filename.to_string(),
                reason: e.to_string(),
            }
        }),
        ReferenceKind::Docx => Ok(plain_text(&parse_upload(filename, bytes)?)),
        ReferenceKind::Unsupported => Err(Error::UnsupportedFormat(filename.to_string())),
    }
}

/// Ingest a reference file, keeping the first `preview_chars` characters.
///
/// Unsupported formats degrade to a placeholder content string.
pub fn ingest_reference(
    filename: &str,
    bytes: &[u8],
    preview_chars: usize,
) -> Result<ReferenceDocument> {
    let content = match extract_reference_text(filename, bytes) {
        Ok(text) => text,
        Err(Error::UnsupportedFormat(name)) => {
            log::warn!("No extraction path for reference {name}; using placeholder");
            UNSUPPORTED_PLACEHOLDER.to_string()
        }
        Err(e) => return Err(e),
    };

    Ok(ReferenceDocument {
        filename: filename.to_string(),
        content: content.chars().take(preview_chars).collect(),
        document_type: reference_kind(filename),
    })
}
