//! Ask a local language model for a production Dockerfile.
//!
//! The model is reached through [`agent::StatelessLLMInterface`]; the
//! binary wires it to Ollama by default.

pub mod agent;
pub mod cli;
pub mod config_manager;

pub use agent::{DockerfileGenerator, LLMError, StatelessLLMInterface};
pub use config_manager::Config;
