//! File I/O operations and validation
//!
//! This module handles package validation, reading XML parts out of the zip
//! container, and staging uploaded bytes in a temporary file.

use std::io::{Cursor, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use zip::ZipArchive;

use crate::error::{Error, Result};

pub(crate) const DOCUMENT_PART: &str = "word/document.xml";
pub(crate) const CORE_PROPERTIES_PART: &str = "docProps/core.xml";
pub(crate) const STYLES_PART: &str = "word/styles.xml";

/// Read the whole package and check that it is a Word document container.
pub(crate) fn read_docx_package(file_path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(file_path).map_err(|e| Error::document_read(file_path, e))?;
    validate_docx_bytes(file_path, &bytes)?;
    Ok(bytes)
}

/// Validates that the bytes hold a zip container with `word/document.xml`
pub(crate) fn validate_docx_bytes(file_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| Error::document_read(file_path, e))?;

    if archive.by_name(DOCUMENT_PART).is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(Error::document_read(
                file_path,
                "this appears to be an Excel file (.xlsx), not a Word document",
            ));
        }

        return Err(Error::document_read(
            file_path,
            "missing word/document.xml; the file may be corrupted or is not a Word document",
        ));
    }

    Ok(())
}

/// Read an optional XML part from the package. A part that is absent yields
/// `None`; a part that exists but cannot be decoded is an error.
pub(crate) fn read_part(file_path: &Path, bytes: &[u8], name: &str) -> Result<Option<String>> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| Error::document_read(file_path, e))?;

    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(_) => return Ok(None),
    };

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| Error::document_read(file_path, format!("{name}: {e}")))?;
    Ok(Some(xml))
}

/// An uploaded file written to a temporary `.docx` path.
///
/// The file is removed when the value is dropped, whichever way the caller
/// leaves its scope.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Write uploaded bytes to a temporary file with a `.docx` suffix.
pub fn stage_upload(bytes: &[u8]) -> Result<StagedUpload> {
    let mut file = tempfile::Builder::new()
        .prefix("plandoc-")
        .suffix(".docx")
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(StagedUpload { file })
}

pub(crate) fn has_extension(filename: &str, extension: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
