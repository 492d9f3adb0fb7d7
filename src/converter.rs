use std::sync::Arc;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ConvertError;
use crate::llm::{ChatCompletion, ChatMessage};
use crate::models::ConvertResponse;
use crate::prompts::PromptBook;

const LOG_PREVIEW_CHARS: usize = 50;

/// Rewrites text for a target audience through the configured LLM
pub struct ConversionService {
    llm: Option<Arc<dyn ChatCompletion>>,
    prompts: PromptBook,
}

impl ConversionService {
    /// `llm` is `None` when the client could not be initialized; every conversion
    /// then fails with [`ConvertError::NotInitialized`].
    pub fn new(llm: Option<Arc<dyn ChatCompletion>>, prompts: PromptBook) -> Self {
        Self { llm, prompts }
    }

    pub fn is_ready(&self) -> bool {
        self.llm.is_some()
    }

    pub fn prompts(&self) -> &PromptBook {
        &self.prompts
    }

    pub async fn convert(&self, text: &str, target: &str) -> Result<ConvertResponse, ConvertError> {
        let Some(llm) = self.llm.as_ref() else {
            error!("Conversion attempted but the LLM client is not initialized");
            return Err(ConvertError::NotInitialized);
        };

        if text.is_empty() || target.is_empty() {
            return Err(ConvertError::MissingField);
        }

        let target_lower = target.to_lowercase();
        let system_prompt = self
            .prompts
            .get(&target_lower)
            .ok_or_else(|| ConvertError::UnsupportedTarget(target.to_string()))?;

        let span = info_span!("convert", request_id = %Uuid::new_v4(), target = %target_lower);
        async move {
            let preview: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
            info!("Converting text: {}...", preview);

            let messages = vec![ChatMessage::system(system_prompt), ChatMessage::user(text)];
            let converted_text = llm.chat_completion(messages).await.map_err(|e| {
                error!("LLM call failed: {}", e);
                ConvertError::from(e)
            })?;

            info!("Conversion successful");
            Ok::<_, ConvertError>(ConvertResponse {
                original_text: text.to_string(),
                converted_text,
                target: target.to_string(),
            })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LLMError;
    use crate::test_support::FakeLLM;

    fn service(llm: FakeLLM) -> (ConversionService, Arc<FakeLLM>) {
        let llm = Arc::new(llm);
        let service = ConversionService::new(Some(llm.clone()), PromptBook::default());
        (service, llm)
    }

    #[tokio::test]
    async fn test_converts_with_target_prompt() {
        let (service, llm) = service(FakeLLM::replying("정중한 문장"));

        let response = service.convert("hi", "Upward").await.unwrap();
        assert_eq!(response.converted_text, "정중한 문장");
        assert_eq!(response.original_text, "hi");
        assert_eq!(response.target, "Upward");

        let sent = llm.last_messages().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].role, "system");
        assert_eq!(sent[0].content, PromptBook::default().get("upward").unwrap());
        assert_eq!(sent[1], ChatMessage::user("hi"));
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let (service, llm) = service(FakeLLM::replying("x"));
        assert!(matches!(service.convert("", "upward").await, Err(ConvertError::MissingField)));
        assert!(matches!(service.convert("hi", "").await, Err(ConvertError::MissingField)));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_target() {
        let (service, llm) = service(FakeLLM::replying("x"));
        let err = service.convert("hi", "Sideways").await.unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedTarget(ref t) if t == "Sideways"));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_not_initialized() {
        let service = ConversionService::new(None, PromptBook::default());
        assert!(!service.is_ready());
        assert!(matches!(
            service.convert("hi", "upward").await,
            Err(ConvertError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let (service, _) = service(FakeLLM::failing(|| LLMError::Api {
            status: 500,
            message: "down".into(),
        }));
        let err = service.convert("hi", "external").await.unwrap_err();
        assert!(matches!(err, ConvertError::Upstream(_)));
    }
}
