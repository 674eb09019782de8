use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::service_client::ServiceClient;
use super::stateless_llm_interface::{LLMError, StatelessLLMInterface};
use crate::agent::input_types::{ChatRequest, Message};

/// OpenAI compatible LLM implementation
/// Works against any server exposing `/chat/completions`, Ollama's `/v1` included
pub struct OpenAICompatibleLLM {
    service: ServiceClient,
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAICompatibleLLM {
    pub fn new(base_url: String, api_key: Option<String>, temperature: Option<f32>) -> Self {
        let service = ServiceClient::new(base_url, api_key);
        info!("Initialized OpenAICompatibleLLM: base_url={}", service.base_url());

        Self {
            service,
            temperature,
        }
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(&self, request: ChatRequest) -> Result<String, LLMError> {
        debug!(
            "OpenAI-compatible chat: model={}, messages={}",
            request.model,
            request.messages.len()
        );

        let body = CompletionBody {
            model: &request.model,
            messages: &request.messages,
            stream: false,
            temperature: self.temperature,
        };

        let response: CompletionResponse =
            self.service.post_json("/chat/completions", &body).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LLMError::MalformedResponse("reply has no message content".to_string()))
    }
}
