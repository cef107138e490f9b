//! Document parsing submodules
//!
//! This module contains specialized parsers for the pieces of a Word
//! package: paragraphs, tables, text runs, headings and property parts.

pub(crate) mod formatting;
pub mod heading;
pub(crate) mod paragraph;
pub(crate) mod properties;
pub mod table;
