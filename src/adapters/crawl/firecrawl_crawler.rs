//! Firecrawl Crawler - Implementation of the Crawler port for Firecrawl's v1 API.
//!
//! Firecrawl crawls asynchronously: `POST /v1/crawl` submits a job and
//! returns its id, then `GET /v1/crawl/{id}` is polled until the job reports
//! `completed`. The whole exchange runs under one configurable deadline.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::domain::crawl::CrawledPage;
use crate::ports::{CrawlError, Crawler};

/// Configuration for the Firecrawl crawler.
#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Overall deadline for submit + poll.
    pub timeout: Duration,
    /// Interval between status polls.
    pub poll_interval: Duration,
}

impl FirecrawlConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.firecrawl.dev".to_string(),
            timeout: Duration::from_secs(480),
            poll_interval: Duration::from_secs(5),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the overall crawl deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Firecrawl API crawler implementation.
pub struct FirecrawlCrawler {
    config: FirecrawlConfig,
    client: Client,
}

impl FirecrawlCrawler {
    /// Creates a new Firecrawl crawler with the given configuration.
    pub fn new(config: FirecrawlConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn submit_url(&self) -> String {
        format!("{}/v1/crawl", self.config.base_url)
    }

    fn status_url(&self, job_id: &str) -> String {
        format!("{}/v1/crawl/{}", self.config.base_url, job_id)
    }

    /// Submits a crawl job and returns its id.
    async fn submit(&self, url: &str, limit: u32) -> Result<String, CrawlError> {
        let body = SubmitRequest {
            url: url.to_string(),
            limit,
            scrape_options: ScrapeOptions {
                formats: vec!["markdown".to_string()],
            },
        };

        let response = self
            .client
            .post(self.submit_url())
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| CrawlError::network(e.to_string()))?;

        let response = map_status(response).await?;

        let submitted: SubmitResponse = response
            .json()
            .await
            .map_err(|e| CrawlError::parse(format!("Failed to parse submit response: {}", e)))?;

        if !submitted.success {
            return Err(CrawlError::Rejected(
                submitted
                    .error
                    .unwrap_or_else(|| "provider reported failure".to_string()),
            ));
        }

        submitted
            .id
            .ok_or_else(|| CrawlError::parse("Submit response missing job id"))
    }

    /// Fetches the current job status.
    async fn poll(&self, job_id: &str) -> Result<StatusResponse, CrawlError> {
        let response = self
            .client
            .get(self.status_url(job_id))
            .bearer_auth(self.config.api_key())
            .send()
            .await
            .map_err(|e| CrawlError::network(e.to_string()))?;

        let response = map_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| CrawlError::parse(format!("Failed to parse status response: {}", e)))
    }
}

#[async_trait]
impl Crawler for FirecrawlCrawler {
    async fn crawl(&self, url: &str, limit: u32) -> Result<Vec<CrawledPage>, CrawlError> {
        let deadline = Instant::now() + self.config.timeout;
        let job_id = self.submit(url, limit).await?;
        debug!(job_id = %job_id, url = %url, "crawl job submitted");

        loop {
            let status = self.poll(&job_id).await?;
            match status.status.as_str() {
                "completed" => {
                    let pages = status
                        .data
                        .into_iter()
                        .map(|doc| CrawledPage {
                            source_url: doc
                                .metadata
                                .and_then(|m| m.source_url)
                                .unwrap_or_else(|| "Unknown".to_string()),
                            markdown: doc.markdown.unwrap_or_default(),
                        })
                        .collect();
                    return Ok(pages);
                }
                "failed" | "cancelled" => {
                    return Err(CrawlError::JobFailed(
                        status.error.unwrap_or_else(|| status.status.clone()),
                    ));
                }
                // "scraping" / "waiting": still in progress
                other => {
                    debug!(job_id = %job_id, status = %other, completed = status.completed, "crawl in progress");
                }
            }

            if Instant::now() + self.config.poll_interval > deadline {
                return Err(CrawlError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                });
            }
            sleep(self.config.poll_interval).await;
        }
    }
}

/// Maps error statuses to CrawlError.
async fn map_status(response: reqwest::Response) -> Result<reqwest::Response, CrawlError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    match status.as_u16() {
        401 | 403 => Err(CrawlError::AuthenticationFailed),
        429 => Err(CrawlError::RateLimited),
        400 | 422 => Err(CrawlError::Rejected(body)),
        _ => Err(CrawlError::network(format!(
            "Unexpected status {}: {}",
            status, body
        ))),
    }
}

// ----- Firecrawl API Types -----

#[derive(Debug, Serialize)]
struct SubmitRequest {
    url: String,
    limit: u32,
    #[serde(rename = "scrapeOptions")]
    scrape_options: ScrapeOptions,
}

#[derive(Debug, Serialize)]
struct ScrapeOptions {
    formats: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    completed: u32,
    #[serde(default)]
    data: Vec<Document>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    markdown: Option<String>,
    metadata: Option<DocumentMetadata>,
}

#[derive(Debug, Deserialize)]
struct DocumentMetadata {
    #[serde(rename = "sourceURL")]
    source_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = FirecrawlConfig::new("fc-test")
            .with_base_url("https://crawl.test")
            .with_timeout(Duration::from_secs(60))
            .with_poll_interval(Duration::from_millis(50));

        assert_eq!(config.base_url, "https://crawl.test");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.poll_interval, Duration::from_millis(50));
        assert_eq!(config.api_key(), "fc-test");
    }

    #[test]
    fn urls_are_built_from_base() {
        let crawler =
            FirecrawlCrawler::new(FirecrawlConfig::new("fc-test").with_base_url("https://c.test"));
        assert_eq!(crawler.submit_url(), "https://c.test/v1/crawl");
        assert_eq!(crawler.status_url("abc"), "https://c.test/v1/crawl/abc");
    }

    #[test]
    fn submit_request_serializes_scrape_options() {
        let body = SubmitRequest {
            url: "https://acme.test".to_string(),
            limit: 10,
            scrape_options: ScrapeOptions {
                formats: vec!["markdown".to_string()],
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"scrapeOptions\""));
        assert!(json.contains("\"formats\":[\"markdown\"]"));
        assert!(json.contains("\"limit\":10"));
    }

    #[test]
    fn status_response_parses_documents() {
        let json = r##"{
            "status": "completed",
            "completed": 2,
            "total": 2,
            "data": [
                {"markdown": "# Home", "metadata": {"sourceURL": "https://acme.test"}},
                {"markdown": null, "metadata": null}
            ]
        }"##;
        let status: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, "completed");
        assert_eq!(status.data.len(), 2);
        assert_eq!(
            status.data[0].metadata.as_ref().unwrap().source_url.as_deref(),
            Some("https://acme.test")
        );
        assert!(status.data[1].markdown.is_none());
    }
}
