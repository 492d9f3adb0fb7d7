use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::config_manager::llm::LLMConfig;
use crate::config_manager::system::SystemConfig;

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "llm_config")]
    #[serde(default)]
    pub llm_config: LLMConfig,

    /// Target audience -> system prompt; empty keeps the built-in prompts
    #[serde(default)]
    pub prompts: HashMap<String, String>,
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_config_value, validate_config};
        let value = read_config_value(path)?;
        validate_config(value)
    }
}
