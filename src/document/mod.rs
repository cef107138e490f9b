//! Document parsing and data structures module
//!
//! This module provides functionality for parsing Microsoft Word (.docx)
//! templates and converting them into a structured representation.

pub(crate) mod io;
pub(crate) mod loader;
pub mod models;
pub mod parsing;
pub mod query;

// Re-export all models and query functions
pub use io::{StagedUpload, stage_upload};
pub use loader::{parse_document, parse_upload};
pub use models::*;
pub use parsing::heading::{heading_level, is_heading_style};
pub use parsing::table::table_from_grid;
pub use query::*;
