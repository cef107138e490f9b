//! Core data structures for document representation
//!
//! This module defines the structural record produced by parsing a template:
//! retained paragraphs, tables with header-typed cells, and document metadata.

use serde::{Deserialize, Serialize};

use crate::classify::SectionType;

/// Style name used when a paragraph carries no explicit style.
pub const DEFAULT_STYLE: &str = "Normal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub paragraphs: Vec<Paragraph>,
    pub tables: Vec<Table>,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Position among all body paragraphs, blanks included.
    pub index: usize,
    pub text: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub table_index: usize,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Data rows only. A table without any row reports -1.
    #[serde(default)]
    pub row_count: i64,
    #[serde(default)]
    pub column_count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    /// 1-based; the header row is row 0.
    #[serde(default)]
    pub row_index: usize,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub column: String,
    #[serde(default)]
    pub value: String,
}

impl Cell {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub paragraph_count: usize,
    pub table_count: usize,
    pub core_properties: CoreProperties,
}

/// Descriptive package properties; absent fields are empty strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoreProperties {
    pub title: String,
    pub author: String,
    pub subject: String,
}

/// A paragraph tagged with the section category it was classified into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSection {
    pub index: usize,
    pub text: String,
    pub section_type: SectionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub sections: Vec<ClassifiedSection>,
    pub total_sections: usize,
}
