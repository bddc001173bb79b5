//! AnalyzeWebsite command handler.
//!
//! Orchestrates the full pipeline: crawl the target site, combine the page
//! markdown under the content budget, ask the LLM for a structured report,
//! and parse the response into a [`Report`].

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::crawl::combine_pages;
use crate::domain::report::{analysis_prompt, parse_report, Report, ReportParseError, SYSTEM_PROMPT};
use crate::ports::{AiError, AiProvider, CompletionRequest, CrawlError, Crawler};

/// Command to analyze a website.
#[derive(Debug, Clone)]
pub struct AnalyzeWebsiteCommand {
    /// The URL to crawl and analyze.
    pub url: String,
}

impl AnalyzeWebsiteCommand {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Errors that can occur during website analysis.
#[derive(Debug, Error)]
pub enum AnalyzeWebsiteError {
    /// The crawl itself failed.
    #[error("Crawl failed: {0}")]
    Crawl(#[from] CrawlError),

    /// The crawl completed but produced no pages.
    #[error("Crawl failed or returned no data")]
    EmptyCrawl,

    /// The LLM call failed.
    #[error("Analysis failed: {0}")]
    AiProvider(#[from] AiError),

    /// The LLM response did not contain a valid report.
    #[error("Report synthesis failed: {0}")]
    ReportParse(#[from] ReportParseError),
}

/// Handles the AnalyzeWebsite command.
pub struct AnalyzeWebsiteHandler {
    crawler: Arc<dyn Crawler>,
    ai_provider: Arc<dyn AiProvider>,
    page_limit: u32,
    max_content_chars: usize,
}

impl AnalyzeWebsiteHandler {
    /// Creates a new handler with the given adapters and crawl settings.
    pub fn new(
        crawler: Arc<dyn Crawler>,
        ai_provider: Arc<dyn AiProvider>,
        page_limit: u32,
        max_content_chars: usize,
    ) -> Self {
        Self {
            crawler,
            ai_provider,
            page_limit,
            max_content_chars,
        }
    }

    /// Executes the analysis pipeline.
    pub async fn handle(&self, cmd: AnalyzeWebsiteCommand) -> Result<Report, AnalyzeWebsiteError> {
        info!(url = %cmd.url, limit = self.page_limit, "starting website analysis");

        let pages = self.crawler.crawl(&cmd.url, self.page_limit).await?;
        if pages.is_empty() {
            return Err(AnalyzeWebsiteError::EmptyCrawl);
        }
        debug!(pages = pages.len(), "crawl complete");

        let content = combine_pages(&pages, self.max_content_chars);

        let request = CompletionRequest::new(analysis_prompt(&content))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_temperature(0.0);

        let completion = self.ai_provider.complete(request).await?;
        debug!(model = %completion.model, "completion received");

        let report = parse_report(&completion.content)?;
        info!(url = %cmd.url, "analysis complete");
        Ok(report)
    }
}
