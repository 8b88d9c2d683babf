//! API route handlers
//!
//! - `check`: the matching relay itself (GET and POST forms)
//! - `health`: liveness probe

pub mod check;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /, no authentication)
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "claimcheck-server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/check",
            "/health"
        ]
    })))
}

/// 404 Not Found handler for undefined routes
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
