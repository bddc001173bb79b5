//! Crawler Port - Interface for website crawling providers.

use async_trait::async_trait;

use crate::domain::crawl::CrawledPage;

/// Port for crawling a website into markdown pages.
#[async_trait]
pub trait Crawler: Send + Sync {
    /// Crawl `url`, returning up to `limit` pages as markdown.
    ///
    /// An empty result is valid at this layer; the analysis pipeline decides
    /// whether no pages is an error.
    async fn crawl(&self, url: &str, limit: u32) -> Result<Vec<CrawledPage>, CrawlError>;
}

/// Crawler errors.
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// The provider rejected the crawl request.
    #[error("crawl rejected: {0}")]
    Rejected(String),

    /// The crawl job reported failure.
    #[error("crawl job failed: {0}")]
    JobFailed(String),

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited")]
    RateLimited,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The crawl did not finish within the configured deadline.
    #[error("crawl timed out after {timeout_secs}s")]
    Timeout {
        /// Configured deadline.
        timeout_secs: u64,
    },
}

impl CrawlError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
