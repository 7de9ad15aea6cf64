//! JSON endpoints: health probe, snapshot export, assistant proxy

use crate::server::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use leadboard_engine::compute;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::warn;

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "leadboard-web",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Export the current snapshot with its summary statistics
pub async fn list_leads(State(state): State<Arc<AppState>>) -> Json<Value> {
    let view = state.controller.snapshot().await;
    let stats = compute(&view.leads);

    Json(json!({
        "leads": view.leads,
        "stats": stats,
        "enrich": view.enrich,
    }))
}

/// Request body for the assistant proxy
#[derive(Debug, Deserialize)]
pub struct AskApiRequest {
    /// Natural-language question about the current snapshot
    pub question: String,
}

/// Forward a question to the assistant over the current snapshot
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskApiRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.controller.ask(&request.question).await {
        Ok(answer) => Ok(Json(json!({ "answer": answer }))),
        Err(e) => {
            warn!(error = %e, "assistant proxy failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "Bad Gateway",
                    "message": "The assistant is unavailable",
                })),
            ))
        }
    }
}
