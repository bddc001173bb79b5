//! SiteScope API server.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sitescope::adapters::ai::{GeminiConfig, GeminiProvider};
use sitescope::adapters::crawl::{FirecrawlConfig, FirecrawlCrawler};
use sitescope::adapters::http::analysis::{routes, AnalysisAppState};
use sitescope::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let gemini_key = config
        .ai
        .gemini_api_key
        .clone()
        .context("GEMINI_API_KEY missing")?;
    let ai_provider = Arc::new(GeminiProvider::new(
        GeminiConfig::new(gemini_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    ));

    let firecrawl_key = config
        .crawler
        .firecrawl_api_key
        .clone()
        .context("FIRECRAWL_API_KEY missing")?;
    let crawler = Arc::new(FirecrawlCrawler::new(
        FirecrawlConfig::new(firecrawl_key)
            .with_base_url(&config.crawler.base_url)
            .with_timeout(config.crawler.timeout())
            .with_poll_interval(config.crawler.poll_interval()),
    ));

    let state = AnalysisAppState::new(
        crawler,
        ai_provider,
        config.crawler.page_limit,
        config.ai.max_content_chars,
    );

    let app = routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config)?)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "SiteScope API listening");
    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}

/// Permissive CORS unless explicit origins are configured.
fn cors_layer(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
