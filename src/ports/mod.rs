//! Ports - trait interfaces decoupling the analysis pipeline from
//! external providers.

mod ai_provider;
mod crawler;

pub use ai_provider::{AiError, AiProvider, CompletionRequest, CompletionResponse, ProviderInfo};
pub use crawler::{CrawlError, Crawler};
