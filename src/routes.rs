use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{convert_text, health_check};
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        .route("/api/convert", post(convert_text))
        .route("/api/health", get(health_check))
        // Static front end for everything else
        .fallback_service(ServeDir::new(&system_config.static_dir))
}

/// Full application with middleware and state applied
pub fn build_app(state: AppState) -> Router {
    create_routes(&state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
