//! HTTP client for the SiteScope API.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::domain::report::Report;

/// Fixed message shown when the backend gives no usable detail.
pub const FALLBACK_ERROR: &str =
    "Failed to analyze website. Please check the URL and try again.";

/// Errors from calling the analysis API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with an error body carrying a `detail` message.
    #[error("backend error: {detail}")]
    Backend { detail: String },

    /// The request failed without a usable backend message (network error,
    /// undecodable body, or an error body without `detail`).
    #[error("request failed: {0}")]
    Request(String),
}

impl ApiError {
    /// The human-readable message to display for this failure.
    pub fn display_message(&self) -> &str {
        match self {
            ApiError::Backend { detail } => detail,
            ApiError::Request(_) => FALLBACK_ERROR,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the SiteScope analysis API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Submits `url` for analysis and returns the parsed report.
    pub async fn analyze(&self, url: &str) -> Result<Report, ApiError> {
        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&json!({ "url": url }))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Report>()
                .await
                .map_err(|e| ApiError::Request(format!("invalid report body: {}", e)));
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody {
                detail: Some(detail),
            }) if !detail.is_empty() => Err(ApiError::Backend { detail }),
            _ => Err(ApiError::Request(format!("status {}", status))),
        }
    }
}
