use async_trait::async_trait;

use crate::domain::{Completion, Prompt};

/// Chat-completion backend. One request per call, no retries.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited by completion API")]
    RateLimited,
    #[error("unexpected completion payload: {0}")]
    InvalidResponse(String),
}
