//! Document loading and orchestration
//!
//! This module contains `parse_document()`, which coordinates the specialized
//! parsing modules to turn a .docx package into a `ParsedDocument`. Parsing is
//! all-or-nothing: any failure returns an error and no partial record.

use std::collections::HashMap;
use std::path::Path;

use super::io::{
    CORE_PROPERTIES_PART, STYLES_PART, has_extension, read_docx_package, read_part, stage_upload,
};
use super::models::*;
use super::parsing::paragraph::extract_paragraphs;
use super::parsing::properties::{parse_core_properties, parse_style_names};
use super::parsing::table::extract_table;
use crate::error::{Error, Result};

/// Parse a .docx file into its structural record.
///
/// This function:
/// 1. Reads and validates the package
/// 2. Resolves paragraph style names from the styles part
/// 3. Extracts non-blank paragraphs in document order
/// 4. Extracts every body table through the table extractor
/// 5. Reads the core properties and derives the counts
pub fn parse_document(file_path: &Path) -> Result<ParsedDocument> {
    log::debug!("Parsing document {}", file_path.display());

    let result = read_docx_package(file_path).and_then(|bytes| parse_package(file_path, &bytes));
    match &result {
        Ok(document) => log::info!(
            "Parsed {}: {} paragraphs, {} tables",
            file_path.display(),
            document.metadata.paragraph_count,
            document.metadata.table_count
        ),
        Err(e) => log::error!("Failed to parse {}: {e}", file_path.display()),
    }
    result
}

/// Parse an uploaded template.
///
/// Only `.docx` filenames are accepted. The bytes are staged in a temporary
/// file which is removed before this function returns, on success or error.
pub fn parse_upload(filename: &str, bytes: &[u8]) -> Result<ParsedDocument> {
    if !has_extension(filename, "docx") {
        return Err(Error::UnsupportedUpload(filename.to_string()));
    }

    let staged = stage_upload(bytes)?;
    parse_document(staged.path())
}

fn parse_package(file_path: &Path, bytes: &[u8]) -> Result<ParsedDocument> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| Error::document_read(file_path, e))?;

    let style_names = match read_part(file_path, bytes, STYLES_PART)? {
        Some(xml) => parse_style_names(&xml)
            .map_err(|e| Error::document_read(file_path, format!("{STYLES_PART}: {e}")))?,
        None => HashMap::new(),
    };

    let core_properties = match read_part(file_path, bytes, CORE_PROPERTIES_PART)? {
        Some(xml) => parse_core_properties(&xml)
            .map_err(|e| Error::document_read(file_path, format!("{CORE_PROPERTIES_PART}: {e}")))?,
        None => CoreProperties::default(),
    };

    let children = &docx.document.children;
    let paragraphs = extract_paragraphs(children, &style_names);

    let tables: Vec<Table> = children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Table(table) => Some(table),
            _ => None,
        })
        .enumerate()
        .map(|(table_index, table)| extract_table(table, table_index))
        .collect();

    let metadata = DocumentMetadata {
        paragraph_count: paragraphs.len(),
        table_count: tables.len(),
        core_properties,
    };

    Ok(ParsedDocument {
        paragraphs,
        tables,
        metadata,
    })
}
