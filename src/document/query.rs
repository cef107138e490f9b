//! Read-only queries over parsed documents

use super::models::*;
use crate::classify::classify;

/// Tag every retained paragraph with its section category.
pub fn identify_sections(document: &ParsedDocument) -> SectionReport {
    let sections: Vec<ClassifiedSection> = document
        .paragraphs
        .iter()
        .map(|paragraph| ClassifiedSection {
            index: paragraph.index,
            text: paragraph.text.clone(),
            section_type: classify(&paragraph.text),
        })
        .collect();

    SectionReport {
        total_sections: sections.len(),
        sections,
    }
}

/// Paragraph text joined by newlines, tables excluded.
pub fn plain_text(document: &ParsedDocument) -> String {
    document
        .paragraphs
        .iter()
        .map(|paragraph| paragraph.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SectionType;

    fn document() -> ParsedDocument {
        let paragraphs = vec![
            Paragraph {
                index: 0,
                text: "테스트 사업계획서".to_string(),
                style: "Title".to_string(),
            },
            Paragraph {
                index: 2,
                text: "시장 분석을 진행합니다.".to_string(),
                style: DEFAULT_STYLE.to_string(),
            },
        ];
        ParsedDocument {
            metadata: DocumentMetadata {
                paragraph_count: paragraphs.len(),
                table_count: 0,
                core_properties: CoreProperties::default(),
            },
            paragraphs,
            tables: Vec::new(),
        }
    }

    #[test]
    fn test_identify_sections_keeps_paragraph_index() {
        let report = identify_sections(&document());
        assert_eq!(report.total_sections, 2);
        assert_eq!(report.sections[0].section_type, SectionType::BusinessOverview);
        assert_eq!(report.sections[1].index, 2);
        assert_eq!(report.sections[1].section_type, SectionType::MarketAnalysis);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            plain_text(&document()),
            "테스트 사업계획서\n시장 분석을 진행합니다."
        );
    }
}
