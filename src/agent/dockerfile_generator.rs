use std::sync::Arc;

use tracing::{debug, info};

use crate::agent::input_types::ChatRequest;
use crate::agent::stateless_llm::{LLMError, StatelessLLMInterface};

/// Placeholder filled with the language name
pub const LANGUAGE_SLOT: &str = "{language}";

/// Instruction sent to the model. Every `{language}` is filled with the same
/// value; the requirement list is fixed.
pub const DOCKERFILE_PROMPT: &str = "\
ONLY Generate an ideal Dockerfile for {language} with best practices. Do not provide any explanation or additional information.
The Dockerfile should be for a {language} application that is designed to run in a production environment.
The Dockerfile should include the following:
- Use a specific base image that is suitable for {language} applications.
- Install any necessary dependencies and tools.
- Set the working directory
- Copy the necessary files into the container.
- Expose the necessary ports.
- Set the command to run the application.
- Use multi-stage builds if applicable.
- Use environment variables for configuration.
- Use a non-root user for security.
- Use best practices for caching and layer optimization.
";

/// Fill the prompt template with `language`.
///
/// Single pass: the inserted text is never scanned for further slots.
pub fn format_prompt(language: &str) -> String {
    DOCKERFILE_PROMPT.replace(LANGUAGE_SLOT, language)
}

/// Request for a fresh single-message conversation asking for a Dockerfile
pub fn build_request(model: &str, language: &str) -> ChatRequest {
    ChatRequest::single_user(model, format_prompt(language))
}

/// Asks an LLM for a Dockerfile
pub struct DockerfileGenerator {
    llm: Arc<dyn StatelessLLMInterface>,
    model: String,
}

impl DockerfileGenerator {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Return the model's reply exactly as received
    pub async fn generate(&self, language: &str) -> Result<String, LLMError> {
        info!("Generating Dockerfile: language={:?}, model={}", language, self.model);
        let request = build_request(&self.model, language);
        let reply = self.llm.chat_completion(request).await?;
        debug!("Received reply: {} bytes", reply.len());
        Ok(reply)
    }
}
