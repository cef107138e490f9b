//! plandoc: business-plan templates in, generated business plans out
//!
//! This library parses Microsoft Word business-plan templates into a
//! structural record (paragraphs, typed tables, metadata), classifies their
//! paragraphs into business-plan sections, generates section content through
//! a pluggable text backend, and assembles new .docx plans.

pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod generation;
pub mod reference;

/// Output format options for printing a parsed template
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

// Re-export commonly used types
pub use classify::{SectionType, classify};
pub use document::{ParsedDocument, parse_document, parse_upload};
pub use error::{Error, Result};
pub use export::{assemble, export_filename};
