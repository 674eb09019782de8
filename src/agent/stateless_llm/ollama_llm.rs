use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::service_client::ServiceClient;
use super::stateless_llm_interface::{LLMError, StatelessLLMInterface};
use crate::agent::input_types::{ChatRequest, Message};

/// Ollama LLM implementation
/// Talks to the native `/api/chat` endpoint with streaming disabled
pub struct OllamaLLM {
    service: ServiceClient,
    keep_alive: Option<String>,
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OllamaChatBody<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    keep_alive: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaReplyMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaReplyMessage {
    content: String,
}

impl OllamaLLM {
    pub fn new(base_url: String, keep_alive: Option<String>, temperature: Option<f32>) -> Self {
        let service = ServiceClient::new(base_url, None);
        info!("Initialized OllamaLLM: base_url={}", service.base_url());

        Self {
            service,
            keep_alive,
            temperature,
        }
    }
}

#[async_trait]
impl StatelessLLMInterface for OllamaLLM {
    async fn chat_completion(&self, request: ChatRequest) -> Result<String, LLMError> {
        debug!(
            "Ollama chat: model={}, messages={}",
            request.model,
            request.messages.len()
        );

        let body = OllamaChatBody {
            model: &request.model,
            messages: &request.messages,
            stream: false,
            keep_alive: self.keep_alive.as_deref(),
            options: self.temperature.map(|temperature| OllamaOptions { temperature }),
        };

        let response: OllamaChatResponse = self.service.post_json("/api/chat", &body).await?;
        Ok(response.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_omits_unset_options() {
        let messages = vec![Message::user("hi")];
        let body = OllamaChatBody {
            model: "gemma3",
            messages: &messages,
            stream: false,
            keep_alive: None,
            options: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "model": "gemma3",
                "messages": [{"role": "user", "content": "hi"}],
                "stream": false
            })
        );
    }

    #[test]
    fn body_carries_keep_alive_and_temperature() {
        let messages = vec![Message::user("hi")];
        let body = OllamaChatBody {
            model: "gemma3",
            messages: &messages,
            stream: false,
            keep_alive: Some("5m"),
            options: Some(OllamaOptions { temperature: 0.5 }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["keep_alive"], "5m");
        assert_eq!(json["options"]["temperature"], 0.5);
    }
}
