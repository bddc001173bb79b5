//! HTTP adapter for the analysis endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalyzeRequest, ErrorResponse, RootResponse};
pub use handlers::AnalysisAppState;
pub use routes::routes;
