use plandoc::document::{Cell, ParsedDocument, Row, Table, parse_upload, table_from_grid};
use plandoc::export::docx::{
    COMPETITIVE_HEADING, FINANCIAL_HEADING, MARKET_HEADING, NOTES_HEADING, NOTES_LABEL,
    OVERVIEW_HEADING, REQUIREMENTS_LABEL,
};
use plandoc::export::{BusinessInfo, GeneratedContent, TemplateParagraph, TemplateStructure, assemble};
use plandoc::SectionType;

fn assemble_and_parse(
    template: Option<&TemplateStructure>,
    content: &GeneratedContent,
    info: &BusinessInfo,
) -> ParsedDocument {
    let _ = env_logger::builder().is_test(true).try_init();
    let buffer = assemble(template, content, info).unwrap();
    parse_upload("plan.docx", &buffer.into_inner()).unwrap()
}

fn texts(document: &ParsedDocument) -> Vec<&str> {
    document.paragraphs.iter().map(|p| p.text.as_str()).collect()
}

fn template_paragraph(text: &str, style: &str) -> TemplateParagraph {
    TemplateParagraph {
        text: text.to_string(),
        style: style.to_string(),
        section_type: plandoc::classify(text),
    }
}

#[cfg(test)]
mod assemble_tests {
    use super::*;

    #[test]
    fn test_title_only_plan() {
        let document = assemble_and_parse(
            None,
            &GeneratedContent::default(),
            &BusinessInfo::titled("스마트 팜 솔루션"),
        );

        assert_eq!(document.paragraphs.len(), 1);
        assert_eq!(document.paragraphs[0].text, "스마트 팜 솔루션");
        assert_eq!(document.paragraphs[0].style, "Title");
        assert!(document.tables.is_empty());
    }

    #[test]
    fn test_default_title() {
        let document =
            assemble_and_parse(None, &GeneratedContent::default(), &BusinessInfo::default());
        assert_eq!(texts(&document), vec!["사업계획서"]);
    }

    #[test]
    fn test_full_plan_section_order() {
        let info = BusinessInfo {
            title: Some("AI 물류 플랫폼".to_string()),
            description: Some("물류 최적화 서비스".to_string()),
            requirements: Some("3년 손익 포함".to_string()),
            notes: Some("보수적 추정".to_string()),
            reference_documents: Vec::new(),
        };
        let content = GeneratedContent {
            market_analysis: Some("시장 규모는 크다".to_string()),
            competitive_analysis: Some("경쟁사는 셋".to_string()),
            financial_plan: Some("매출 계획".to_string()),
            financial_tables: vec![table_from_grid(
                &[vec!["항목", "2024"], vec!["매출", "100억"]],
                0,
            )],
        };

        let document = assemble_and_parse(None, &content, &info);
        assert_eq!(
            texts(&document),
            vec![
                "AI 물류 플랫폼",
                OVERVIEW_HEADING,
                "물류 최적화 서비스",
                MARKET_HEADING,
                "시장 규모는 크다",
                COMPETITIVE_HEADING,
                "경쟁사는 셋",
                FINANCIAL_HEADING,
                "매출 계획",
                NOTES_HEADING,
                REQUIREMENTS_LABEL,
                "3년 손익 포함",
                NOTES_LABEL,
                "보수적 추정",
            ]
        );

        assert_eq!(document.paragraphs[1].style, "Heading 1");
        assert_eq!(document.paragraphs[2].style, "Normal");
        assert_eq!(document.paragraphs[10].style, "Heading 2");

        assert_eq!(document.tables.len(), 1);
        assert_eq!(document.tables[0].headers, vec!["항목", "2024"]);
        assert_eq!(document.tables[0].rows[0].cells[1], Cell::new("2024", "100억"));
    }

    #[test]
    fn test_empty_generated_section_keeps_heading() {
        let content = GeneratedContent {
            market_analysis: Some(String::new()),
            ..GeneratedContent::default()
        };

        let document = assemble_and_parse(None, &content, &BusinessInfo::titled("계획"));
        assert_eq!(texts(&document), vec!["계획", MARKET_HEADING]);
    }

    #[test]
    fn test_multiline_text_survives_round_trip() {
        let content = GeneratedContent {
            market_analysis: Some("첫 줄\n둘째 줄".to_string()),
            ..GeneratedContent::default()
        };

        let document = assemble_and_parse(None, &content, &BusinessInfo::titled("계획"));
        assert_eq!(document.paragraphs[2].text, "첫 줄\n둘째 줄");
    }

    #[test]
    fn test_table_rows_match_header_width() {
        let table = Table {
            table_index: 0,
            headers: vec!["구분".to_string(), "금액".to_string()],
            rows: vec![
                Row {
                    row_index: 0,
                    cells: vec![
                        Cell::new("구분", "인건비"),
                        Cell::new("금액", "30"),
                        Cell::new("Column_2", "dropped"),
                    ],
                },
                Row {
                    row_index: 1,
                    cells: vec![Cell::new("구분", "임대료")],
                },
            ],
            row_count: 2,
            column_count: 2,
        };
        let content = GeneratedContent {
            financial_plan: Some("비용".to_string()),
            financial_tables: vec![table],
            ..GeneratedContent::default()
        };

        let document = assemble_and_parse(None, &content, &BusinessInfo::titled("계획"));
        let written = &document.tables[0];
        assert_eq!(written.row_count, 2);
        assert_eq!(written.rows[0].cells.len(), 2);
        assert_eq!(written.rows[0].cells[1], Cell::new("금액", "30"));
        assert_eq!(written.rows[1].cells.len(), 2);
        assert_eq!(written.rows[1].cells[1], Cell::new("금액", ""));
    }

    #[test]
    fn test_tables_without_rows_are_skipped() {
        let content = GeneratedContent {
            financial_plan: Some("비용".to_string()),
            financial_tables: vec![
                table_from_grid(&[vec!["항목", "2024"]], 0),
                table_from_grid::<&str>(&[], 1),
            ],
            ..GeneratedContent::default()
        };

        let document = assemble_and_parse(None, &content, &BusinessInfo::titled("계획"));
        assert!(document.tables.is_empty());
    }

    #[test]
    fn test_financial_tables_need_financial_plan() {
        let content = GeneratedContent {
            financial_tables: vec![table_from_grid(&[vec!["항목"], vec!["매출"]], 0)],
            ..GeneratedContent::default()
        };

        let document = assemble_and_parse(None, &content, &BusinessInfo::titled("계획"));
        assert!(document.tables.is_empty());
    }

    #[test]
    fn test_template_paragraphs_carried_over() {
        let template = TemplateStructure {
            paragraphs: vec![
                template_paragraph("회사 연혁", "Heading 1"),
                template_paragraph("2019년 설립", "Normal"),
                template_paragraph("시장 동향", "Heading 1"),
                template_paragraph("경쟁사 현황", "Normal"),
                template_paragraph("재무 목표", "Normal"),
            ],
        };
        assert_eq!(template.paragraphs[2].section_type, SectionType::MarketAnalysis);

        let document = assemble_and_parse(
            Some(&template),
            &GeneratedContent::default(),
            &BusinessInfo::titled("계획"),
        );

        assert_eq!(texts(&document), vec!["계획", "회사 연혁", "2019년 설립"]);
        assert_eq!(document.paragraphs[1].style, "Heading 2");
        assert_eq!(document.paragraphs[2].style, "Normal");
    }

    #[test]
    fn test_notes_only() {
        let info = BusinessInfo {
            notes: Some("대외비".to_string()),
            ..BusinessInfo::titled("계획")
        };

        let document = assemble_and_parse(None, &GeneratedContent::default(), &info);
        assert_eq!(texts(&document), vec!["계획", NOTES_HEADING, NOTES_LABEL, "대외비"]);
    }
}
