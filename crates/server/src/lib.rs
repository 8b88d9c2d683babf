//! Claimcheck Server - HTTP relay in front of the match engine
//!
//! This crate exposes the claimcheck matching core over HTTP:
//!
//! - **`/check`**: forward query text to the article search service and
//!   return its response with every article annotated `ismatch`
//! - **`/health`**: liveness probe
//!
//! # Features
//!
//! - **Middleware**: CORS, request ID tracking, structured tracing, timeouts
//! - **Configuration**: environment variable and file-based configuration
//! - **Error Handling**: JSON error responses with error codes
//! - **Graceful Shutdown**: SIGTERM / ctrl-c handling
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Request forms
//!
//! - `GET /check` with a percent-encoded `text` header (legacy transport)
//! - `GET /check?text=...`
//! - `POST /check` with the query text as the body

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod search;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use search::{Article, SearchClient, SearchResponse};
pub use server::start_server;
pub use state::ServerState;
