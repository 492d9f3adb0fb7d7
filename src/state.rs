use std::sync::Arc;
use tracing::{error, info};

use crate::config_manager::Config;
use crate::converter::ConversionService;
use crate::llm::LLMFactory;
use crate::prompts::PromptBook;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub converter: Arc<ConversionService>,
}

impl AppState {
    /// Build state from configuration. A client that fails to initialize is logged
    /// and left out, so the server still starts and reports the problem per request.
    pub fn new(config: Config) -> Self {
        let llm = match LLMFactory::create_llm(&config.llm_config) {
            Ok(llm) => {
                info!("LLM client initialized successfully");
                Some(llm)
            }
            Err(e) => {
                error!("Error initializing LLM client: {}", e);
                None
            }
        };

        let prompts = PromptBook::from_config(&config.prompts);
        info!("Supported targets: {:?}", prompts.targets());

        Self::with_converter(config, ConversionService::new(llm, prompts))
    }

    pub fn with_converter(config: Config, converter: ConversionService) -> Self {
        Self {
            config: Arc::new(config),
            converter: Arc::new(converter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_leaves_converter_uninitialized() {
        let mut config = Config::default();
        config.llm_config.llm_api_key = String::new();
        let state = AppState::new(config);
        assert!(!state.converter.is_ready());
    }

    #[test]
    fn test_configured_key_initializes_converter() {
        let mut config = Config::default();
        config.llm_config.llm_api_key = "key".to_string();
        let state = AppState::new(config);
        assert!(state.converter.is_ready());
    }
}
