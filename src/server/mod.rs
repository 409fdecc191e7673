use crate::utils::error::{CaptureError, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
}

/// GET / -- index greeting; the pipeline's smoke stage checks for it.
async fn index() -> &'static str {
    "Hello World! The CI/CD demo application is running.\n"
}

/// GET /health -- liveness probe.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}

/// Bind and serve until SIGINT/SIGTERM.
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr =
        format!("{}:{}", host, port)
            .parse()
            .map_err(|e| CaptureError::ConfigError {
                message: format!("Invalid listen address '{}:{}': {}", host, port, e),
            })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", addr);

    axum::serve(listener, router().layer(TraceLayer::new_for_http()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for a termination signal so the server shuts down cleanly whether
/// stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
