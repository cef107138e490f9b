//! Assembler inputs
//!
//! These mirror the JSON the export path accepts: every field is optional
//! and missing fields simply omit their section.

use serde::{Deserialize, Serialize};

use crate::classify::{SectionType, classify};
use crate::document::{ParsedDocument, Table};

pub const DEFAULT_TITLE: &str = "사업계획서";
pub const DEFAULT_FILENAME_STEM: &str = "business_plan";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reference_documents: Vec<String>,
}

impl BusinessInfo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn title_or_default(&self) -> &str {
        non_empty(&self.title).unwrap_or(DEFAULT_TITLE)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn requirements(&self) -> Option<&str> {
        non_empty(&self.requirements)
    }

    pub fn notes(&self) -> Option<&str> {
        non_empty(&self.notes)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Generated section texts. A section is present when its key is present,
/// even with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitive_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_plan: Option<String>,
    #[serde(default)]
    pub financial_tables: Vec<Table>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateParagraph {
    pub text: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub section_type: SectionType,
}

/// Template paragraphs carried into the assembled document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateStructure {
    #[serde(default)]
    pub paragraphs: Vec<TemplateParagraph>,
}

impl TemplateStructure {
    /// Tag each parsed paragraph with its classified section.
    pub fn from_parsed(document: &ParsedDocument) -> Self {
        let paragraphs = document
            .paragraphs
            .iter()
            .map(|paragraph| TemplateParagraph {
                text: paragraph.text.clone(),
                style: paragraph.style.clone(),
                section_type: classify(&paragraph.text),
            })
            .collect();

        Self { paragraphs }
    }
}

/// The full export request: `{template_structure, generated_content, business_info}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub template_structure: TemplateStructure,
    #[serde(default)]
    pub generated_content: GeneratedContent,
    #[serde(default)]
    pub business_info: BusinessInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_business_fields_count_as_absent() {
        let info = BusinessInfo {
            title: Some(String::new()),
            description: Some(String::new()),
            notes: Some("주의".to_string()),
            ..BusinessInfo::default()
        };
        assert_eq!(info.title_or_default(), DEFAULT_TITLE);
        assert_eq!(info.description(), None);
        assert_eq!(info.notes(), Some("주의"));
    }

    #[test]
    fn test_export_request_from_sparse_json() {
        let request: ExportRequest = serde_json::from_str(
            r#"{
                "template_structure": {"paragraphs": [{"text": "회사 소개", "style": "Heading 1"}]},
                "generated_content": {"market_analysis": "", "financial_tables": [
                    {"headers": ["항목", "2024"], "rows": [{"cells": [{"value": "매출"}]}]}
                ]},
                "business_info": {"title": "AI 물류"}
            }"#,
        )
        .unwrap();

        let paragraph = &request.template_structure.paragraphs[0];
        assert_eq!(paragraph.section_type, SectionType::General);
        assert_eq!(request.generated_content.market_analysis.as_deref(), Some(""));
        assert_eq!(request.generated_content.competitive_analysis, None);
        assert_eq!(request.generated_content.financial_tables[0].headers.len(), 2);
        assert_eq!(request.business_info.title_or_default(), "AI 물류");
    }
}
