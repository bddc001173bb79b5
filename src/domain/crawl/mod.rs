//! Crawled page types and content combination.

use serde::{Deserialize, Serialize};

/// One page retrieved by a crawl, as markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawledPage {
    /// The URL the content was scraped from.
    pub source_url: String,
    /// Page content rendered as markdown.
    pub markdown: String,
}

impl CrawledPage {
    pub fn new(source_url: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            markdown: markdown.into(),
        }
    }
}

/// Combines crawled pages into a single document for analysis.
///
/// Each page is preceded by a `--- PAGE: <url> ---` separator so the model
/// can attribute content to its source. The result is truncated to
/// `max_chars` on a character boundary.
pub fn combine_pages(pages: &[CrawledPage], max_chars: usize) -> String {
    let mut combined = String::new();
    for page in pages {
        combined.push_str("\n\n--- PAGE: ");
        combined.push_str(&page.source_url);
        combined.push_str(" ---\n\n");
        combined.push_str(&page.markdown);
    }
    truncate_chars(combined, max_chars)
}

/// Truncates to at most `max_chars` characters without splitting a char.
fn truncate_chars(mut text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            text.truncate(byte_idx);
            text
        }
        None => text,
    }
}
