use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::config_manager::main::Config;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read a configuration file with environment variable substitution
pub fn read_config_text(config_path: &Path) -> Result<String> {
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    let bytes = fs::read(config_path)
        .with_context(|| format!("Failed to read configuration file: {}", config_path.display()))?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
    let content = String::from_utf8(bytes.to_vec())
        .with_context(|| format!("Configuration file is not UTF-8: {}", config_path.display()))?;

    substitute_env_vars(&content)
}

/// Replace `${VAR_NAME}` with the value of the environment variable.
/// Unset variables are left as written.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| {
            debug!("Environment variable {} not set, leaving placeholder", var_name);
            caps[0].to_string()
        })
    });
    Ok(replaced.into_owned())
}

/// Parse configuration text, choosing JSON or YAML by file extension
pub fn parse_config(content: &str, config_path: &Path) -> Result<Config> {
    let extension = config_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let config = match extension.as_deref() {
        Some("json") | Some("jsonld") => serde_json::from_str(content)
            .with_context(|| format!("Invalid JSON configuration: {}", config_path.display()))?,
        _ => serde_yaml::from_str(content)
            .with_context(|| format!("Invalid YAML configuration: {}", config_path.display()))?,
    };
    Ok(config)
}
