//! Application state and server lifecycle

use crate::controller::DashboardController;
use crate::routes::build_router;
use crate::templates::build_templates;
use leadboard_client::ApiClient;
use leadboard_core::{Config, Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Tera;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Dashboard controller, shared with detached tasks
    pub controller: Arc<DashboardController>,
    /// Compiled template registry
    pub templates: Tera,
}

impl AppState {
    /// Create new application state
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded templates fail to parse.
    pub fn new(config: Config) -> Result<Self> {
        let templates = build_templates()?;
        let client = ApiClient::new(config.backend.base_url.clone());
        let controller = Arc::new(DashboardController::new(client, config.ui.clone()));

        Ok(Self {
            config,
            controller,
            templates,
        })
    }
}

/// Run the dashboard server until shutdown
///
/// # Errors
///
/// Returns an error if the state cannot be built, the address does not
/// parse, the listener cannot bind, or the server fails.
pub async fn run(config: Config) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);

    // Startup fetch with the default selection, so the first page render
    // already has a snapshot (or an error banner) to show.
    info!(backend = %state.config.backend.base_url, "issuing startup fetch");
    state.controller.initial_fetch().await;

    let app = build_router(Arc::clone(&state)).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    )
    .parse()
    .map_err(|e| Error::Configuration {
        message: format!("invalid server address: {e}"),
    })?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Configuration {
            message: format!("failed to bind {addr}: {e}"),
        })?;

    info!("🌐 Dashboard: http://{addr}");
    info!("💚 Health:    http://{addr}/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Other(format!("server error: {e}")))?;

    info!("server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
