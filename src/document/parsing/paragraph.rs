//! Paragraph extraction

use std::collections::HashMap;

use super::super::models::{DEFAULT_STYLE, Paragraph};
use super::formatting::extract_paragraph_text;

/// Resolve the display style name of a paragraph.
///
/// The paragraph's style id is looked up in the package's style table; ids
/// the table does not know are reported as-is. Paragraphs with no style get
/// the normal-text style.
pub(crate) fn paragraph_style(
    para: &docx_rs::Paragraph,
    style_names: &HashMap<String, String>,
) -> String {
    match &para.property.style {
        Some(style) => style_names
            .get(&style.val)
            .cloned()
            .unwrap_or_else(|| style.val.clone()),
        None => DEFAULT_STYLE.to_string(),
    }
}

/// Collect the non-blank body paragraphs in document order.
///
/// `index` counts every body paragraph, blanks included, so it is not dense
/// after filtering.
pub(crate) fn extract_paragraphs(
    children: &[docx_rs::DocumentChild],
    style_names: &HashMap<String, String>,
) -> Vec<Paragraph> {
    children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(para),
            _ => None,
        })
        .enumerate()
        .filter_map(|(index, para)| {
            let text = extract_paragraph_text(para);
            let text = text.trim();
            if text.is_empty() {
                return None;
            }

            Some(Paragraph {
                index,
                text: text.to_string(),
                style: paragraph_style(para, style_names),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(text: &str) -> docx_rs::Paragraph {
        docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(text))
    }

    #[test]
    fn test_blank_paragraphs_keep_original_index() {
        let docx = docx_rs::Docx::new()
            .add_paragraph(para("첫 문단"))
            .add_paragraph(para("   "))
            .add_paragraph(docx_rs::Paragraph::new())
            .add_paragraph(para(" 시장 분석 "));

        let paragraphs = extract_paragraphs(&docx.document.children, &HashMap::new());
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].index, 0);
        assert_eq!(paragraphs[1].index, 3);
        assert_eq!(paragraphs[1].text, "시장 분석");
        assert_eq!(paragraphs[1].style, DEFAULT_STYLE);
    }

    #[test]
    fn test_style_resolution() {
        let mut names = HashMap::new();
        names.insert("Heading1".to_string(), "Heading 1".to_string());

        assert_eq!(paragraph_style(&para("x").style("Heading1"), &names), "Heading 1");
        assert_eq!(paragraph_style(&para("x").style("a5"), &names), "a5");
        assert_eq!(paragraph_style(&para("x"), &names), "Normal");
    }
}
