use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::stateless_llm_interface::LLMError;

/// Thin JSON-over-HTTP client shared by the LLM implementations
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` to `{base_url}{path}` and decode the JSON reply.
    ///
    /// Non-2xx replies become [`LLMError::Status`] carrying the server's
    /// error message when one can be found in the body.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, LLMError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|source| LLMError::Unavailable {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| LLMError::Unavailable { url, source })?;

        if !status.is_success() {
            return Err(LLMError::Status {
                status,
                message: error_message(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| LLMError::MalformedResponse(e.to_string()))
    }
}

/// Pull a human readable message out of an error body.
///
/// Ollama answers `{"error": "..."}`, OpenAI-style servers answer
/// `{"error": {"message": "..."}}`; anything else is returned as is.
fn error_message(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let from_json = parsed.as_ref().and_then(|v| {
        let error = v.get("error")?;
        error
            .as_str()
            .or_else(|| error.get("message").and_then(|m| m.as_str()))
            .map(|s| s.to_string())
    });

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => "<empty body>".to_string(),
        None => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_reads_ollama_shape() {
        assert_eq!(
            error_message(r#"{"error":"model 'gemma3' not found"}"#),
            "model 'gemma3' not found"
        );
    }

    #[test]
    fn error_message_reads_openai_shape() {
        assert_eq!(
            error_message(r#"{"error":{"message":"bad key","type":"auth"}}"#),
            "bad key"
        );
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message("  gateway down \n"), "gateway down");
        assert_eq!(error_message(""), "<empty body>");
    }

    #[test]
    fn base_url_drops_trailing_slash_and_empty_key() {
        let client = ServiceClient::new("http://localhost:11434/", Some(String::new()));
        assert_eq!(client.base_url(), "http://localhost:11434");
        assert!(client.api_key.is_none());
    }
}
