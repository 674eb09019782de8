use serde::{Deserialize, Serialize};

/// Model requested when no configuration overrides it
pub const DEFAULT_MODEL: &str = "gemma3";

/// Address Ollama listens on when nothing else is configured
pub const DEFAULT_OLLAMA_HOST: &str = "http://127.0.0.1:11434";

const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// Configuration for the Ollama native chat API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_ollama_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// How long the server keeps the model loaded, e.g. `"5m"` or `"-1"`
    #[serde(rename = "keep_alive")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_base_url(),
            model: default_model(),
            keep_alive: None,
            temperature: None,
        }
    }
}

/// Configuration for OpenAI-compatible LLM providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAICompatibleConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_openai_compatible_base_url")]
    pub base_url: String,

    #[serde(rename = "llm_api_key")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Default for OpenAICompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_compatible_base_url(),
            llm_api_key: None,
            model: default_model(),
            temperature: None,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_ollama_base_url() -> String {
    std::env::var("OLLAMA_HOST")
        .ok()
        .map(|host| normalize_ollama_host(&host))
        .unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string())
}

fn default_openai_compatible_base_url() -> String {
    format!("{}/v1", DEFAULT_OLLAMA_HOST)
}

/// Turn an `OLLAMA_HOST` style value into a base URL.
///
/// `host`, `host:port` and `scheme://host[:port][/path]` are accepted. A
/// missing scheme means `http` on port 11434. With an explicit scheme and no
/// port, the scheme's own port applies: 80 for `http`, 443 for `https`.
pub fn normalize_ollama_host(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_OLLAMA_HOST.to_string();
    }

    let (scheme, rest, default_port) = match raw.split_once("://") {
        Some((scheme, rest)) => {
            let scheme = scheme.to_ascii_lowercase();
            let port = match scheme.as_str() {
                "https" => 443,
                "http" => 80,
                _ => DEFAULT_OLLAMA_PORT,
            };
            (scheme, rest, port)
        }
        None => ("http".to_string(), raw, DEFAULT_OLLAMA_PORT),
    };

    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], rest[idx..].trim_end_matches('/')),
        None => (rest, ""),
    };

    let has_port = if authority.starts_with('[') {
        authority.contains("]:")
    } else {
        authority.contains(':')
    };

    let authority = if authority.is_empty() {
        "127.0.0.1".to_string()
    } else {
        authority.to_string()
    };

    if has_port {
        format!("{}://{}{}", scheme, authority, path)
    } else {
        format!("{}://{}:{}{}", scheme, authority, default_port, path)
    }
}
