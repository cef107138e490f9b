//! Section generation
//!
//! The generative-text backend is reached only through [`TextBackend`]: a
//! system prompt and a user prompt go in, text comes out. On top of it,
//! [`SectionGenerator`] exposes one method per business-plan section.
//! Backend failures are fatal to the call that hit them and are never
//! retried.

mod openai;
pub mod prompts;
pub mod tables;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::document::Table;
use crate::error::Result;
use crate::export::{BusinessInfo, GeneratedContent};

pub use openai::OpenAiBackend;
pub use tables::extract_markdown_tables;

/// A single completion request to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The generative-text backend contract.
#[async_trait]
pub trait TextBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Business facts and reference material a prompt is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessContext {
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    #[serde(default)]
    pub reference_documents: Vec<String>,
}

impl From<&BusinessInfo> for BusinessContext {
    fn from(info: &BusinessInfo) -> Self {
        Self {
            title: info.title.clone().unwrap_or_default(),
            description: info.description().map(str::to_string),
            requirements: info.requirements().map(str::to_string),
            reference_documents: info.reference_documents.clone(),
        }
    }
}

/// A financial plan: the generated prose and any tables found in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialPlan {
    pub text: String,
    pub tables: Vec<Table>,
}

#[async_trait]
pub trait SectionGenerator: Send + Sync {
    async fn market_analysis(&self, context: &BusinessContext) -> Result<String>;

    async fn competitive_analysis(&self, context: &BusinessContext) -> Result<String>;

    async fn financial_plan(&self, context: &BusinessContext) -> Result<FinancialPlan>;
}

/// Token limits and sampling temperature per section.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub market_max_tokens: u32,
    pub competitive_max_tokens: u32,
    pub financial_max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for GenerationSettings {
    fn from(config: &Config) -> Self {
        Self {
            temperature: config.backend.temperature,
            market_max_tokens: config.generation.market_max_tokens,
            competitive_max_tokens: config.generation.competitive_max_tokens,
            financial_max_tokens: config.generation.financial_max_tokens,
        }
    }
}

/// Builds the section prompts and sends them to a [`TextBackend`].
pub struct PromptedGenerator<B> {
    backend: B,
    settings: GenerationSettings,
}

impl<B: TextBackend> PromptedGenerator<B> {
    pub fn new(backend: B, settings: GenerationSettings) -> Self {
        Self { backend, settings }
    }

    async fn run(
        &self,
        section: &str,
        system_prompt: &str,
        user_prompt: String,
        max_tokens: u32,
    ) -> Result<String> {
        log::info!("Generating {section}");
        let request = CompletionRequest {
            system_prompt: system_prompt.to_string(),
            user_prompt,
            temperature: self.settings.temperature,
            max_tokens,
        };

        self.backend.complete(&request).await.inspect_err(|e| {
            log::error!("{section} generation failed: {e}");
        })
    }
}

#[async_trait]
impl<B: TextBackend> SectionGenerator for PromptedGenerator<B> {
    async fn market_analysis(&self, context: &BusinessContext) -> Result<String> {
        self.run(
            "market analysis",
            prompts::MARKET_SYSTEM_PROMPT,
            prompts::market_analysis_prompt(context),
            self.settings.market_max_tokens,
        )
        .await
    }

    async fn competitive_analysis(&self, context: &BusinessContext) -> Result<String> {
        self.run(
            "competitive analysis",
            prompts::COMPETITIVE_SYSTEM_PROMPT,
            prompts::competitive_analysis_prompt(context),
            self.settings.competitive_max_tokens,
        )
        .await
    }

    async fn financial_plan(&self, context: &BusinessContext) -> Result<FinancialPlan> {
        let text = self
            .run(
                "financial plan",
                prompts::FINANCIAL_SYSTEM_PROMPT,
                prompts::financial_plan_prompt(context),
                self.settings.financial_max_tokens,
            )
            .await?;

        let tables = extract_markdown_tables(&text);
        log::debug!("Found {} tables in the financial plan", tables.len());
        Ok(FinancialPlan { text, tables })
    }
}

pub const DISABLED_MESSAGE: &str =
    "AI 생성 기능이 비활성화되어 있습니다. OPENAI_API_KEY를 설정해주세요.";
pub const DISABLED_SHORT_MESSAGE: &str = "AI 생성 기능이 비활성화되어 있습니다.";

/// Stand-in used when no API key is configured: every section is a notice
/// that generation is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl SectionGenerator for DisabledGenerator {
    async fn market_analysis(&self, _context: &BusinessContext) -> Result<String> {
        Ok(DISABLED_MESSAGE.to_string())
    }

    async fn competitive_analysis(&self, _context: &BusinessContext) -> Result<String> {
        Ok(DISABLED_SHORT_MESSAGE.to_string())
    }

    async fn financial_plan(&self, _context: &BusinessContext) -> Result<FinancialPlan> {
        Ok(FinancialPlan {
            text: DISABLED_SHORT_MESSAGE.to_string(),
            tables: Vec::new(),
        })
    }
}

/// Pick the live generator when `OPENAI_API_KEY` is set, the disabled one
/// otherwise.
pub fn generator_from_env(config: &Config) -> Result<Box<dyn SectionGenerator>> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => {
            let backend = OpenAiBackend::new(api_key, config.base_url(), &config.backend.model)?;
            Ok(Box::new(PromptedGenerator::new(
                backend,
                GenerationSettings::from(config),
            )))
        }
        _ => {
            log::warn!("OPENAI_API_KEY not found. AI generation will be disabled.");
            Ok(Box::new(DisabledGenerator))
        }
    }
}

/// Generate all three sections. The first failure aborts the whole run.
pub async fn generate_plan(
    generator: &dyn SectionGenerator,
    context: &BusinessContext,
) -> Result<GeneratedContent> {
    let market = generator.market_analysis(context).await?;
    let competitive = generator.competitive_analysis(context).await?;
    let financial = generator.financial_plan(context).await?;

    Ok(GeneratedContent {
        market_analysis: Some(market),
        competitive_analysis: Some(competitive),
        financial_plan: Some(financial.text),
        financial_tables: financial.tables,
    })
}
