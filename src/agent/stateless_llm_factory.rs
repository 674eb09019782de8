use std::sync::Arc;
use tracing::info;
use anyhow::Result;

use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::agent::stateless_llm::openai_compatible_llm::OpenAICompatibleLLM;
use crate::agent::stateless_llm::ollama_llm::OllamaLLM;
use crate::config_manager::Config;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration; `llm_provider` picks the section
    pub fn create_llm(config: &Config) -> Result<Arc<dyn StatelessLLMInterface>> {
        info!("Initializing LLM: {}", config.llm_provider);

        match config.llm_provider.as_str() {
            "ollama_llm" => {
                let ollama = &config.ollama_llm;
                Ok(Arc::new(OllamaLLM::new(
                    ollama.base_url.clone(),
                    ollama.keep_alive.clone(),
                    ollama.temperature,
                )))
            }
            "openai_compatible_llm" => {
                let openai = &config.openai_compatible_llm;
                Ok(Arc::new(OpenAICompatibleLLM::new(
                    openai.base_url.clone(),
                    openai.llm_api_key.clone(),
                    openai.temperature,
                )))
            }
            other => Err(anyhow::anyhow!("Unsupported LLM provider: {}", other)),
        }
    }
}
