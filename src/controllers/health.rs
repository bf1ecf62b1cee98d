use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready once an upstream credential is configured
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    if config.has_news_api_key() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "news_api": "configured"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "news_api": "missing"
            })),
        )
    }
}
