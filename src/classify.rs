//! Keyword-based section classification
//!
//! Paragraph text is matched against an ordered chain of keyword rules. The
//! first rule with any matching keyword wins; rule order is the only
//! tie-break, so a sentence mentioning both "경쟁" and "분석" lands in
//! market analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    MarketAnalysis,
    CompetitiveAnalysis,
    FinancialPlan,
    BusinessOverview,
    SwotAnalysis,
    #[default]
    General,
}

impl SectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::MarketAnalysis => "market_analysis",
            SectionType::CompetitiveAnalysis => "competitive_analysis",
            SectionType::FinancialPlan => "financial_plan",
            SectionType::BusinessOverview => "business_overview",
            SectionType::SwotAnalysis => "swot_analysis",
            SectionType::General => "general",
        }
    }

    /// Sections whose content is produced by the generator rather than
    /// copied from the template.
    pub fn is_generated(self) -> bool {
        matches!(
            self,
            SectionType::MarketAnalysis
                | SectionType::CompetitiveAnalysis
                | SectionType::FinancialPlan
        )
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct SectionRule {
    keywords: &'static [&'static str],
    section: SectionType,
}

impl SectionRule {
    fn matches(&self, text_lower: &str) -> bool {
        self.keywords.iter().any(|keyword| text_lower.contains(keyword))
    }
}

// Evaluated top to bottom.
const RULES: &[SectionRule] = &[
    SectionRule {
        keywords: &["시장", "분석", "market"],
        section: SectionType::MarketAnalysis,
    },
    SectionRule {
        keywords: &["경쟁", "competitor", "차별"],
        section: SectionType::CompetitiveAnalysis,
    },
    SectionRule {
        keywords: &["재무", "financial", "손익", "현금"],
        section: SectionType::FinancialPlan,
    },
    SectionRule {
        keywords: &["사업", "개요", "summary"],
        section: SectionType::BusinessOverview,
    },
    SectionRule {
        keywords: &["swot"],
        section: SectionType::SwotAnalysis,
    },
];

/// Classify paragraph text into a business-plan section.
pub fn classify(text: &str) -> SectionType {
    let text_lower = text.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.matches(&text_lower))
        .map(|rule| rule.section)
        .unwrap_or_default()
}
