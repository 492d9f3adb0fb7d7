use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use crate::config_manager::LLMConfig;
use super::interface::ChatCompletion;
use super::openai_compatible_llm::OpenAICompatibleLLM;

/// Factory for creating chat completion clients
pub struct LLMFactory;

impl LLMFactory {
    /// Create an LLM client based on the configuration.
    /// Every supported provider speaks the OpenAI chat completion protocol.
    pub fn create_llm(config: &LLMConfig) -> Result<Arc<dyn ChatCompletion>> {
        info!("Initializing LLM: {}", config.llm_provider);

        match config.llm_provider.as_str() {
            "openai_compatible_llm" | "openai_llm" | "gemini_llm" | "zhipu_llm"
            | "deepseek_llm" | "groq_llm" | "mistral_llm" => {
                if !config.has_api_key() {
                    anyhow::bail!("No API key configured for {}", config.llm_provider);
                }
                Ok(Arc::new(OpenAICompatibleLLM::new(
                    config.model.clone(),
                    config.base_url.clone(),
                    config.llm_api_key.clone(),
                    config.temperature,
                    config.max_tokens,
                    config.top_p,
                )))
            }
            _ => Err(anyhow::anyhow!("Unsupported LLM provider: {}", config.llm_provider)),
        }
    }
}
