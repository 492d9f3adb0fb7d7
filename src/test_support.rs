use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use crate::converter::ConversionService;
use crate::llm::{ChatCompletion, ChatMessage, LLMError};
use crate::prompts::PromptBook;

/// Scripted chat completion that records what it was sent
pub struct FakeLLM {
    reply: Result<String, fn() -> LLMError>,
    calls: AtomicUsize,
    last: Mutex<Option<Vec<ChatMessage>>>,
}

impl FakeLLM {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn failing(make_error: fn() -> LLMError) -> Self {
        Self {
            reply: Err(make_error),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for FakeLLM {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(messages);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}

pub fn service_with(llm: Arc<FakeLLM>) -> ConversionService {
    ConversionService::new(Some(llm), PromptBook::default())
}

/// Serve `app` on an ephemeral local port and return its origin
pub async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
