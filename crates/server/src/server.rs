//! Server initialization and routing
//!
//! This module handles the Axum server setup: router construction, the
//! middleware stack (CORS, tracing, timeouts, request ids), and graceful
//! shutdown on SIGTERM / ctrl-c.

use crate::config::ServerConfig;
use crate::middleware::request_id;
use crate::routes::{api_info, check, health, not_found};
use crate::state::ServerState;
use axum::http::header::ORIGIN;
use axum::http::{HeaderName, Method};
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// How long browsers may cache the CORS preflight result.
const CORS_MAX_AGE: Duration = Duration::from_secs(48 * 60 * 60);

/// Build the Axum router with all routes and middleware
fn build_router(state: Arc<ServerState>) -> Router {
    // The original service allowed any origin with GET access and a custom
    // `text` request header; POST is the body-carrying variant.
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([ORIGIN, HeaderName::from_static("text")])
            .max_age(CORS_MAX_AGE)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/check", get(check::check_get).post(check::check_post))
        .fallback(not_found)
        .layer(TimeoutLayer::new(state.config.timeout()))
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the claimcheck HTTP server
///
/// Blocks until shutdown. Initializes structured logging, builds shared
/// state (search client + decision engine), binds, and serves.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    // Create server state
    let state = Arc::new(ServerState::new(config.clone())?);

    // Build router
    let app = build_router(state);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting claimcheck server on {} (search endpoint: {})",
        addr,
        config.search_endpoint
    );
    tracing::info!(
        "Timeout: {}s, CORS: {}, cache max-age: {}s",
        config.timeout_secs,
        config.enable_cors,
        config.cache_max_age_secs
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
