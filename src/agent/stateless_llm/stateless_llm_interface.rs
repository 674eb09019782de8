use async_trait::async_trait;
use thiserror::Error;

use crate::agent::input_types::ChatRequest;

/// Failure talking to the chat-completion service.
///
/// Callers treat every variant the same way: the call failed and nothing is
/// retried. The variants only exist to make the error trace readable.
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("chat service unreachable at {url}: {source}")]
    Unavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("chat service returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("malformed chat service response: {0}")]
    MalformedResponse(String),
}

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Submit one chat request and return the reply text as received
    async fn chat_completion(&self, request: ChatRequest) -> Result<String, LLMError>;
}
