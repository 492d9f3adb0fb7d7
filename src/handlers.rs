use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::ConvertError;
use crate::models::{ConvertRequest, ConvertResponse};
use crate::state::AppState;

pub async fn convert_text(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ConvertError> {
    let Json(request) = payload.map_err(|rejection| {
        let message = rejection.body_text();
        warn!("Rejected convert request body: {}", message);
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ConvertError::UnsupportedMediaType(message),
            _ => ConvertError::InvalidBody(message),
        }
    })?;

    let response = state
        .converter
        .convert(&request.text, &request.target)
        .await?;
    Ok(Json(response))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "llm": state.converter.is_ready(),
        "targets": state.converter.prompts().targets(),
    }))
}
