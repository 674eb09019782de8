use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config_manager::stateless_llm::{OllamaConfig, OpenAICompatibleConfig};

/// File looked up in the working directory when `CONFIG_PATH` is not set
pub const DEFAULT_CONFIG_FILE: &str = "conf.yaml";

/// Main configuration for the application
///
/// Every field has a default, so a missing file behaves exactly like the
/// plain "talk to local Ollama with gemma3" setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Which provider section to use: `ollama_llm` or `openai_compatible_llm`
    #[serde(rename = "llm_provider")]
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,

    #[serde(rename = "ollama_llm")]
    #[serde(default)]
    pub ollama_llm: OllamaConfig,

    #[serde(rename = "openai_compatible_llm")]
    #[serde(default)]
    pub openai_compatible_llm: OpenAICompatibleConfig,
}

fn default_llm_provider() -> String {
    "ollama_llm".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_provider: default_llm_provider(),
            ollama_llm: OllamaConfig::default(),
            openai_compatible_llm: OpenAICompatibleConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &Path) -> Result<Self> {
        use crate::config_manager::utils::{parse_config, read_config_text};
        let content = read_config_text(path)?;
        parse_config(&content, path)
    }

    /// Load configuration the way the binary does: `CONFIG_PATH` first, then
    /// `conf.yaml` in the working directory, then defaults
    pub fn from_env() -> Result<Self> {
        let explicit = std::env::var_os("CONFIG_PATH").map(PathBuf::from);
        Self::locate(explicit, Path::new("."))
    }

    /// Resolve configuration from an explicit path or a search directory.
    ///
    /// An explicit path must load; the fallback file is only used when it
    /// exists.
    pub fn locate(explicit: Option<PathBuf>, search_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let config = Self::load(&path)?;
            info!("Loaded configuration from: {}", path.display());
            return Ok(config);
        }

        let fallback = search_dir.join(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            let config = Self::load(&fallback)?;
            info!("Loaded configuration from: {}", fallback.display());
            return Ok(config);
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Model identifier of the selected provider
    pub fn model(&self) -> &str {
        match self.llm_provider.as_str() {
            "openai_compatible_llm" => &self.openai_compatible_llm.model,
            _ => &self.ollama_llm.model,
        }
    }
}
