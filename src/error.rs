use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::LLMError;

/// Body of every non-success reply from `/api/convert`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failures of a conversion request. The display text is what the caller sees.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("LLM 클라이언트가 초기화되지 않았습니다. API 키를 확인하세요.")]
    NotInitialized,

    #[error("요청 본문을 해석할 수 없습니다: {0}")]
    InvalidBody(String),

    #[error("요청은 application/json 형식이어야 합니다: {0}")]
    UnsupportedMediaType(String),

    #[error("텍스트와 변환 대상은 필수입니다.")]
    MissingField,

    #[error("지원하지 않는 대상입니다: {0}")]
    UnsupportedTarget(String),

    #[error("AI 모델을 호출하는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.")]
    Upstream(#[source] LLMError),

    #[error("서버에서 예기치 않은 오류가 발생했습니다.")]
    Unexpected(#[source] LLMError),
}

impl ConvertError {
    pub fn status(&self) -> StatusCode {
        match self {
            ConvertError::InvalidBody(_)
            | ConvertError::MissingField
            | ConvertError::UnsupportedTarget(_) => StatusCode::BAD_REQUEST,
            ConvertError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ConvertError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            ConvertError::NotInitialized | ConvertError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<LLMError> for ConvertError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::Api { .. } | LLMError::Http(_) => ConvertError::Upstream(err),
            LLMError::EmptyResponse => ConvertError::Unexpected(err),
        }
    }
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
