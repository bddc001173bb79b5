//! Analysis prompt construction and report parsing.
//!
//! The prompt pairs the business analyst instructions with JSON format
//! instructions for the [`Report`] schema. Models routinely wrap JSON output
//! in a Markdown code fence, so parsing strips one before deserializing.

use thiserror::Error;

use super::model::Report;

/// System instructions guiding the model's analysis.
pub const SYSTEM_PROMPT: &str = "You are an expert business intelligence analyst and SEO specialist. \
Analyze the following combined content from a website and extract structured intelligence.";

/// Schema instructions appended to every analysis prompt.
const FORMAT_INSTRUCTIONS: &str = r#"Respond ONLY with a JSON object matching this schema, with no commentary:
{
  "company_overview": "1-2 paragraphs summarizing the company from a professional perspective",
  "products_services": [{"name": "...", "description": "..."}],
  "uniqueness": ["3-5 key brand differentiators"],
  "target_audience": "primary and secondary target customers",
  "tech_stack": ["key technologies, tools, or platforms identified"],
  "swot_analysis": {
    "strengths": ["..."], "weaknesses": ["..."],
    "opportunities": ["..."], "threats": ["..."]
  },
  "seo_metadata": {
    "title": "the primary SEO page title",
    "description": "the primary meta description",
    "primary_keywords": ["top 5-10 SEO keywords"]
  },
  "brand_voice": "the company's brand voice and tone",
  "social_links": ["social media profile URLs found"],
  "policies": "concise summary of privacy, terms, and compliance policies",
  "contact_info": {"addresses": ["..."], "emails": ["..."], "phones": ["..."]}
}"#;

/// Builds the full analysis prompt for the combined crawl content.
pub fn analysis_prompt(content: &str) -> String {
    format!(
        "Your analysis MUST include:\n\
         1. A deep SWOT Analysis (Strengths, Weaknesses, Opportunities, Threats).\n\
         2. SEO Metadata (Identify the likely main title, description, and top keywords).\n\
         3. Brand Voice (Assess the tone and personality of the writing).\n\
         4. Thorough contact extraction (Search footers/headers across all pages for \
         multiple office locations, emails, and phone numbers).\n\
         5. Social media profile links.\n\n\
         Be precise, professional, and provide actionable insights.\n\n\
         CONTENT:\n{content}\n\n{FORMAT_INSTRUCTIONS}"
    )
}

/// Errors from parsing a model response into a [`Report`].
#[derive(Debug, Error)]
pub enum ReportParseError {
    #[error("model returned an empty response")]
    Empty,

    #[error("model response is not valid report JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses a model response into a [`Report`].
///
/// Accepts bare JSON or JSON wrapped in a single ```json code fence.
pub fn parse_report(content: &str) -> Result<Report, ReportParseError> {
    let trimmed = strip_code_fence(content.trim());
    if trimmed.is_empty() {
        return Err(ReportParseError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Strips a surrounding Markdown code fence, with or without a language tag.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the language tag line (e.g. "json") if present
    let rest = match rest.split_once('\n') {
        Some((_tag, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
