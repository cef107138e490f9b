//! Document output
//!
//! Assembly of generated business plans into .docx packages, the table
//! writer they share with the parser's data model, and plain-text rendering.

pub mod content;
pub mod docx;
pub mod table;
pub mod text;

pub use content::{BusinessInfo, ExportRequest, GeneratedContent, TemplateParagraph, TemplateStructure};
pub use docx::{assemble, export_filename};
pub use table::write_table;
pub use text::render_text;
