//! Mock AI Provider for testing.
//!
//! A configurable implementation of the AiProvider port, allowing tests to
//! run without calling the real Gemini API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAiProvider::new().with_response(report_json);
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AiError, AiProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// A configured mock response.
enum MockResponse {
    Success(String),
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
}

/// Mock AI provider for testing.
///
/// Responses are consumed in configuration order; when the queue is empty a
/// network error is returned. All received requests are recorded for
/// verification.
#[derive(Clone, Default)]
pub struct MockAiProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful completion with the given content.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success(content.into()));
        self
    }

    /// Queues a rate-limit error.
    pub fn with_rate_limit(self, retry_after_secs: u32) -> Self {
        self.push(MockResponse::RateLimited { retry_after_secs });
        self
    }

    /// Queues a provider-unavailable error.
    pub fn with_unavailable(self, message: impl Into<String>) -> Self {
        self.push(MockResponse::Unavailable {
            message: message.into(),
        });
        self
    }

    /// Queues an authentication failure.
    pub fn with_auth_failure(self) -> Self {
        self.push(MockResponse::AuthenticationFailed);
        self
    }

    /// Queues a network error.
    pub fn with_network_error(self, message: impl Into<String>) -> Self {
        self.push(MockResponse::Network {
            message: message.into(),
        });
        self
    }

    /// Number of completion calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All requests received, in order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success(content)) => Ok(CompletionResponse {
                content,
                model: "mock".to_string(),
            }),
            Some(MockResponse::RateLimited { retry_after_secs }) => {
                Err(AiError::rate_limited(retry_after_secs))
            }
            Some(MockResponse::Unavailable { message }) => Err(AiError::unavailable(message)),
            Some(MockResponse::AuthenticationFailed) => Err(AiError::AuthenticationFailed),
            Some(MockResponse::Network { message }) => Err(AiError::network(message)),
            None => Err(AiError::network("MockAiProvider: no responses configured")),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock")
    }
}
