//! HTTP handlers for the analysis endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use tracing::error;

use crate::application::handlers::analysis::{
    AnalyzeWebsiteCommand, AnalyzeWebsiteHandler,
};
use crate::domain::report::Report;
use crate::ports::{AiProvider, Crawler};

use super::dto::{AnalyzeRequest, ErrorResponse, RootResponse};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AnalysisAppState {
    crawler: Arc<dyn Crawler>,
    ai_provider: Arc<dyn AiProvider>,
    page_limit: u32,
    max_content_chars: usize,
}

impl AnalysisAppState {
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

    pub fn analyze_website_handler(&self) -> AnalyzeWebsiteHandler {
        AnalyzeWebsiteHandler::new(
            self.crawler.clone(),
            self.ai_provider.clone(),
            self.page_limit,
            self.max_content_chars,
        )
    }
}

/// Root identity route
///
/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "SiteScope API is running".to_string(),
    })
}

/// Analyze a website
///
/// POST /analyze
pub async fn analyze_website(
    State(app_state): State<AnalysisAppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Report>, (StatusCode, Json<ErrorResponse>)> {
    validate_url(&req.url).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid URL")),
        )
    })?;

    let handler = app_state.analyze_website_handler();
    let report = handler
        .handle(AnalyzeWebsiteCommand::new(req.url))
        .await
        .map_err(|e| {
            error!(error = %e, "analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
        })?;

    Ok(Json(report))
}

/// Accepts absolute http(s) URLs only.
fn validate_url(url: &str) -> Result<(), ()> {
    let parsed = reqwest::Url::parse(url).map_err(|_| ())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(()),
    }
}
