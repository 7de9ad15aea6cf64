//! Route definitions for the dashboard server

use crate::handlers;
use crate::server::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Page and interaction routes
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::pages::dashboard))
        .route("/view", get(handlers::pages::set_view))
        .route("/chart", get(handlers::pages::set_chart))
        .route("/enrich", get(handlers::pages::set_enrich))
        .route("/filters", get(handlers::pages::apply_filters))
        .route("/slider", get(handlers::pages::apply_slider))
        .route("/refresh", get(handlers::pages::refresh))
        .route("/ask", post(handlers::pages::ask))
}

/// JSON endpoints
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leads", get(handlers::api::list_leads))
        .route("/api/ask", post(handlers::api::ask))
        .layer(CompressionLayer::new())
}

/// Health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::api::health_check))
}

/// Combine all routes into a single router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(api_routes())
        .merge(health_routes())
        .fallback(not_found_handler)
        .with_state(state)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "message": "The requested endpoint does not exist"
        })),
    )
}
