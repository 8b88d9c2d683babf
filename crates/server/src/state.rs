use std::sync::Arc;

use claimcheck::ClaimcheckConfig;
use matcher::{MatchConfig, Matcher};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::search::SearchClient;

/// Environment variable naming an optional YAML pipeline config file.
const PIPELINE_CONFIG_ENV: &str = "CLAIMCHECK_PIPELINE_CONFIG";

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Outbound client for the article search service
    pub search: SearchClient,

    /// Decision engine (stateless; shared across requests)
    pub matcher: Arc<Matcher>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let search = SearchClient::new(config.search_endpoint.clone(), config.search_timeout())?;
        let matcher = Arc::new(Matcher::new(load_match_config()?)?);

        Ok(Self {
            config: Arc::new(config),
            search,
            matcher,
        })
    }
}

/// Matcher thresholds come from the YAML pipeline config when one is named
/// via `CLAIMCHECK_PIPELINE_CONFIG`, otherwise the built-in defaults.
fn load_match_config() -> ServerResult<MatchConfig> {
    match std::env::var(PIPELINE_CONFIG_ENV) {
        Ok(path) => {
            let pipeline = ClaimcheckConfig::from_file(&path)
                .map_err(|err| ServerError::Config(format!("{PIPELINE_CONFIG_ENV}: {err}")))?;
            tracing::info!(path, "loaded pipeline config");
            Ok(pipeline.match_config())
        }
        Err(_) => Ok(MatchConfig::default()),
    }
}
