//! HTTP DTOs for the analysis endpoint.
//!
//! The success body for `/analyze` is the [`Report`](crate::domain::report::Report)
//! itself; failures use the `{"detail": ...}` shape clients extract their
//! display message from.

use serde::{Deserialize, Serialize};

/// Request to analyze a website
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Standard error response: `{"detail": "<message>"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Response for the root identity route
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
}
