//! Prompt templates for each generated section

use super::BusinessContext;

pub const MARKET_SYSTEM_PROMPT: &str =
    "당신은 전문 사업계획서 작성자입니다. 시장 분석을 상세하고 체계적으로 작성합니다.";
pub const COMPETITIVE_SYSTEM_PROMPT: &str =
    "당신은 시장 전문가입니다. 경쟁사 분석과 차별화 전략을 명확하게 제시합니다.";
pub const FINANCIAL_SYSTEM_PROMPT: &str =
    "당신은 재무 전문가입니다. 현실적이고 구체적인 재무 계획을 수립합니다.";

const MISSING: &str = "N/A";
const NO_REFERENCES: &str = "참고 문서 없음";

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

fn title(context: &BusinessContext) -> &str {
    if context.title.is_empty() {
        MISSING
    } else {
        &context.title
    }
}

fn reference_context(context: &BusinessContext) -> String {
    if context.reference_documents.is_empty() {
        NO_REFERENCES.to_string()
    } else {
        context.reference_documents.join("\n\n")
    }
}

pub fn market_analysis_prompt(context: &BusinessContext) -> String {
    format!(
        "다음 사업에 대한 상세한 시장 분석을 작성해주세요:

**사업 정보:**
- 제목: {title}
- 설명: {description}
- 요구사항: {requirements}

**참고 자료:**
{references}

**작성 내용:**
1. 시장 규모 및 성장률
2. 주요 트렌드
3. 타겟 고객 분석
4. 시장 진입 기회

한글로 상세하게 작성하되, 구조화되고 전문적으로 작성해주세요.
",
        title = title(context),
        description = or_missing(&context.description),
        requirements = or_missing(&context.requirements),
        references = reference_context(context),
    )
}

pub fn competitive_analysis_prompt(context: &BusinessContext) -> String {
    format!(
        "다음 사업에 대한 경쟁사 분석 및 차별화 전략을 작성해주세요:

**사업 정보:**
- 제목: {title}
- 설명: {description}

**참고 자료:**
{references}

**작성 내용:**
1. 주요 경쟁사 분석 (최소 3개)
2. 경쟁사 대비 강점/약점
3. 차별화 전략
4. 경쟁 우위 요소

한글로 상세하게 작성해주세요.
",
        title = title(context),
        description = or_missing(&context.description),
        references = reference_context(context),
    )
}

pub fn financial_plan_prompt(context: &BusinessContext) -> String {
    format!(
        "다음 사업에 대한 3개년 재무 계획을 작성해주세요:

**사업 정보:**
- 제목: {title}
- 설명: {description}

**작성 내용:**
1. 매출 계획 (연도별)
2. 비용 구조
3. 손익 예측
4. 자금 조달 계획

표 형식으로 구체적인 숫자를 포함하여 작성해주세요.
",
        title = title(context),
        description = or_missing(&context.description),
    )
}
