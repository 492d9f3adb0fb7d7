use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::error::ErrorBody;
use crate::models::{ConvertRequest, ConvertResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    /// Non-success reply carrying the server's `error` message
    #[error("{0}")]
    Server(String),

    /// Non-success reply without a readable `error` message
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the conversion endpoint
#[derive(Debug, Clone)]
pub struct ConvertClient {
    client: Client,
    endpoint: String,
}

impl ConvertClient {
    /// `origin` is scheme, host and port, e.g. `http://127.0.0.1:5000`
    pub fn new(origin: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/convert", origin.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn convert(&self, text: &str, target: &str) -> Result<ConvertResponse, ClientError> {
        let request = ConvertRequest {
            text: text.to_string(),
            target: target.to_string(),
        };

        debug!("POST {} target={}", self.endpoint, target);
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) if !err.error.is_empty() => ClientError::Server(err.error),
                _ => ClientError::Status(status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::build_app;
    use crate::state::AppState;
    use crate::test_support::{service_with, spawn_router, FakeLLM};
    use crate::config_manager::Config;
    use axum::{http::StatusCode, routing::post, Router};
    use std::sync::Arc;

    async fn server(llm: FakeLLM) -> String {
        let state = AppState::with_converter(Config::default(), service_with(Arc::new(llm)));
        spawn_router(build_app(state)).await
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        assert_eq!(
            ConvertClient::new("http://localhost:5000/").endpoint(),
            "http://localhost:5000/api/convert"
        );
    }

    #[tokio::test]
    async fn test_convert_success() {
        let origin = server(FakeLLM::replying("협조 부탁드립니다.")).await;
        let response = ConvertClient::new(&origin).convert("help", "lateral").await.unwrap();
        assert_eq!(response.converted_text, "협조 부탁드립니다.");
        assert_eq!(response.target, "lateral");
    }

    #[tokio::test]
    async fn test_server_error_message() {
        let origin = server(FakeLLM::replying("x")).await;
        let err = ConvertClient::new(&origin).convert("help", "nobody").await.unwrap_err();
        assert!(matches!(err, ClientError::Server(_)));
        assert_eq!(err.to_string(), "지원하지 않는 대상입니다: nobody");
    }

    #[tokio::test]
    async fn test_status_without_error_body() {
        let app = Router::new().route(
            "/api/convert",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let origin = spawn_router(app).await;

        let err = ConvertClient::new(&origin).convert("a", "upward").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = ConvertClient::new(&origin).convert("a", "upward").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
