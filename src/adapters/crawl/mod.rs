//! Crawler adapters.

mod firecrawl_crawler;
mod mock_crawler;

pub use firecrawl_crawler::{FirecrawlConfig, FirecrawlCrawler};
pub use mock_crawler::MockCrawler;
