//! Crawler provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Firecrawl provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Firecrawl API key
    pub firecrawl_api_key: Option<String>,

    /// Base URL for the Firecrawl API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum pages per crawl
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Overall deadline for a crawl job in seconds (submit + poll)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Interval between job status polls in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl CrawlerConfig {
    /// Get the crawl deadline as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the poll interval as Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.firecrawl_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Validate crawler configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("FIRECRAWL_API_KEY"));
        }
        if self.page_limit == 0 || self.page_limit > 100 {
            return Err(ValidationError::InvalidPageLimit);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            firecrawl_api_key: None,
            base_url: default_base_url(),
            page_limit: default_page_limit(),
            timeout_secs: default_timeout(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.firecrawl.dev".to_string()
}

fn default_page_limit() -> u32 {
    10
}

fn default_timeout() -> u64 {
    480
}

fn default_poll_interval() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawler_config_defaults() {
        let config = CrawlerConfig::default();
        assert_eq!(config.base_url, "https://api.firecrawl.dev");
        assert_eq!(config.page_limit, 10);
        assert_eq!(config.poll_interval_secs, 5);
    }

    #[test]
    fn test_validation_missing_key() {
        let config = CrawlerConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_page_limit_bounds() {
        let base = CrawlerConfig {
            firecrawl_api_key: Some("fc-test".to_string()),
            ..Default::default()
        };
        assert!(base.validate().is_ok());

        let config = CrawlerConfig {
            page_limit: 0,
            ..base.clone()
        };
        assert!(config.validate().is_err());

        let config = CrawlerConfig {
            page_limit: 500,
            ..base
        };
        assert!(config.validate().is_err());
    }
}
