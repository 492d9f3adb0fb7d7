use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI-compatible chat completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(rename = "llm_provider")]
    #[serde(default = "default_provider")]
    pub llm_provider: String,

    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Empty means "read GROQ_API_KEY at startup"
    #[serde(rename = "llm_api_key")]
    #[serde(default)]
    pub llm_api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(rename = "max_tokens")]
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(rename = "top_p")]
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

fn default_provider() -> String {
    "groq_llm".to_string()
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "moonshotai/kimi-k2-instruct-0905".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_top_p() -> f32 {
    1.0
}

impl LLMConfig {
    /// Fill an empty API key from the environment
    pub fn with_env_api_key(mut self) -> Self {
        if self.llm_api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("GROQ_API_KEY") {
                self.llm_api_key = key;
            }
        }
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.llm_api_key.trim().is_empty()
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_provider(),
            base_url: default_base_url(),
            llm_api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
        }
    }
}
