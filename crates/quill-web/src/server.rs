use std::future::Future;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{health_routes, note_routes, unknown_endpoint};
use crate::state::AppState;
use crate::{Result, WebError};
use quill_config::ServerConfig;

const MAX_BODY_SIZE_1MB: usize = 1024 * 1024;

/// Assemble the full application router around the given state
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(note_routes())
        .merge(health_routes())
        .fallback(unknown_endpoint)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_1MB))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind to the configured address and serve until Ctrl-C / SIGTERM
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config
        .socket_addr()
        .map_err(|e| WebError::Config(e.to_string()))?;

    let listener = TcpListener::bind(addr).await.map_err(WebError::Io)?;
    tracing::info!("Starting web server on http://{}", addr);

    serve(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(WebError::Io)?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
