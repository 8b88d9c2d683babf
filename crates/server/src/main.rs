//! claimcheck server binary.
//!
//! Relays query text to the article search service and annotates each
//! returned article with whether it actually matches the query.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
