//! Route definitions for the analysis endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze_website, root, AnalysisAppState};

/// Create the analysis router
///
/// # Endpoints
///
/// - `GET /` - Identity/health route
/// - `POST /analyze` - Crawl and analyze a website
pub fn routes() -> Router<AnalysisAppState> {
    Router::new()
        .route("/", get(root))
        .route("/analyze", post(analyze_website))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_creates_valid_router() {
        // Ensures the route configuration compiles and creates a valid router
        let _routes = routes();
    }
}
