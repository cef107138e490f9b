//! Business-plan document assembly
//!
//! Writes the generated sections in a fixed order, re-emits the template's
//! non-generated paragraphs, and appends the reference notes. The result is
//! a complete .docx package held in memory.

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, Style, StyleType};
use std::io::Cursor;

use super::content::{BusinessInfo, DEFAULT_FILENAME_STEM, GeneratedContent, TemplateStructure};
use super::table::write_table;
use crate::document::is_heading_style;
use crate::error::{Error, Result};

const TITLE_STYLE: &str = "Title";
const HEADING1_STYLE: &str = "Heading1";
const HEADING2_STYLE: &str = "Heading2";

pub const OVERVIEW_HEADING: &str = "1. 사업 개요";
pub const MARKET_HEADING: &str = "2. 시장 분석";
pub const COMPETITIVE_HEADING: &str = "3. 경쟁사 분석 및 차별화 전략";
pub const FINANCIAL_HEADING: &str = "4. 재무 계획";
pub const NOTES_HEADING: &str = "참고사항";
pub const REQUIREMENTS_LABEL: &str = "필수 요구사항:";
pub const NOTES_LABEL: &str = "주의사항:";

/// Assemble a business plan package.
///
/// Missing optional inputs only omit their sections. The returned buffer is
/// positioned at its start.
pub fn assemble(
    template: Option<&TemplateStructure>,
    content: &GeneratedContent,
    info: &BusinessInfo,
) -> Result<Cursor<Vec<u8>>> {
    let mut docx = base_document().add_paragraph(
        styled_paragraph(info.title_or_default(), TITLE_STYLE).align(AlignmentType::Center),
    );

    if let Some(description) = info.description() {
        docx = section(docx, OVERVIEW_HEADING, description);
    }

    if let Some(market) = &content.market_analysis {
        docx = section(docx, MARKET_HEADING, market);
    }

    if let Some(competitive) = &content.competitive_analysis {
        docx = section(docx, COMPETITIVE_HEADING, competitive);
    }

    if let Some(financial) = &content.financial_plan {
        docx = section(docx, FINANCIAL_HEADING, financial);
        for table in &content.financial_tables {
            docx = write_table(docx, table);
        }
    }

    if let Some(template) = template {
        let mut carried = 0;
        for paragraph in template
            .paragraphs
            .iter()
            .filter(|paragraph| !paragraph.section_type.is_generated())
        {
            docx = if is_heading_style(&paragraph.style) {
                docx.add_paragraph(styled_paragraph(&paragraph.text, HEADING2_STYLE))
            } else {
                docx.add_paragraph(text_paragraph(&paragraph.text))
            };
            carried += 1;
        }
        log::debug!("Carried {carried} template paragraphs into the plan");
    }

    let requirements = info.requirements();
    let notes = info.notes();
    if requirements.is_some() || notes.is_some() {
        docx = docx
            .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
            .add_paragraph(styled_paragraph(NOTES_HEADING, HEADING1_STYLE));

        if let Some(requirements) = requirements {
            docx = docx
                .add_paragraph(styled_paragraph(REQUIREMENTS_LABEL, HEADING2_STYLE))
                .add_paragraph(text_paragraph(requirements));
        }

        if let Some(notes) = notes {
            docx = docx
                .add_paragraph(styled_paragraph(NOTES_LABEL, HEADING2_STYLE))
                .add_paragraph(text_paragraph(notes));
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Package(e.to_string()))?;
    buffer.set_position(0);

    log::info!(
        "Assembled \"{}\" ({} bytes)",
        info.title_or_default(),
        buffer.get_ref().len()
    );
    Ok(buffer)
}

/// Download filename for an assembled plan: the title with spaces replaced
/// by underscores. Path separators are replaced too, so the name never
/// leaves the directory it is written to.
pub fn export_filename(info: &BusinessInfo) -> String {
    let stem = info
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_FILENAME_STEM);
    format!("{stem}.docx").replace([' ', '/', '\\'], "_")
}

fn base_document() -> Docx {
    Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(52),
        )
        .add_style(
            Style::new(HEADING1_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_style(
            Style::new(HEADING2_STYLE, StyleType::Paragraph)
                .name("Heading 2")
                .size(26)
                .bold(),
        )
}

fn section(docx: Docx, heading: &str, body: &str) -> Docx {
    log::debug!("Writing section \"{heading}\"");
    docx.add_paragraph(styled_paragraph(heading, HEADING1_STYLE))
        .add_paragraph(text_paragraph(body))
}

fn styled_paragraph(text: &str, style: &str) -> Paragraph {
    text_paragraph(text).style(style)
}

/// A paragraph whose embedded newlines become line breaks.
fn text_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(&BusinessInfo::titled("AI 기반 물류 플랫폼")),
            "AI_기반_물류_플랫폼.docx"
        );
        assert_eq!(export_filename(&BusinessInfo::default()), "business_plan.docx");
    }

    #[test]
    fn test_export_filename_stays_in_directory() {
        let name = export_filename(&BusinessInfo::titled("../etc/계획 초안"));
        assert_eq!(name, ".._etc_계획_초안.docx");
        assert!(!name.contains('/'));

        let name = export_filename(&BusinessInfo::titled(r"..\사업\계획"));
        assert_eq!(name, ".._사업_계획.docx");
    }

    #[test]
    fn test_assembled_buffer_starts_at_zero() {
        let buffer = assemble(None, &GeneratedContent::default(), &BusinessInfo::default()).unwrap();
        assert_eq!(buffer.position(), 0);
        // zip local file header
        assert!(buffer.get_ref().starts_with(b"PK"));
    }
}
