//! Mock Crawler for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::crawl::CrawledPage;
use crate::ports::{CrawlError, Crawler};

/// Mock crawler for testing.
///
/// Returns a fixed set of pages (or a fixed error) and records every crawl
/// request for verification.
#[derive(Clone, Default)]
pub struct MockCrawler {
    pages: Arc<Mutex<Vec<CrawledPage>>>,
    error: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<(String, u32)>>>,
}

impl MockCrawler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the pages every crawl returns.
    pub fn with_pages(self, pages: Vec<CrawledPage>) -> Self {
        *self.pages.lock().unwrap() = pages;
        self
    }

    /// Configures every crawl to fail with a job error.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.error.lock().unwrap() = Some(message.into());
        self
    }

    /// Number of crawl calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All `(url, limit)` pairs received, in order.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Crawler for MockCrawler {
    async fn crawl(&self, url: &str, limit: u32) -> Result<Vec<CrawledPage>, CrawlError> {
        self.calls.lock().unwrap().push((url.to_string(), limit));

        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(CrawlError::JobFailed(message));
        }
        Ok(self.pages.lock().unwrap().clone())
    }
}
