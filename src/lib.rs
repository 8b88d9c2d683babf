//! Workspace umbrella crate for claimcheck.
//!
//! Claimcheck decides whether candidate articles returned by a search
//! service actually match a user's query message. Two independent signals
//! drive the decision: exact URL equivalence between links in the query and
//! links attached to a candidate, and — when the query carries no links —
//! whitespace-insensitive longest-common-substring overlap between the two
//! texts.
//!
//! This crate stitches the layers together so callers get the whole engine
//! from a single API entry point; the HTTP relay lives in
//! `claimcheck-server`.

pub use matcher::{
    set_match_metrics, MatchBranch, MatchCandidate, MatchConfig, MatchError, MatchMetrics,
    Matcher,
};
pub use similarity::{
    longest_common_substring, longest_common_substring_chunked, strip_whitespace, ChunkConfig,
    SimilarityError,
};
pub use urlcheck::{equivalent, exists_equivalent, UrlCompareError};

mod config;

pub use crate::config::{ClaimcheckConfig, ConfigLoadError};

/// Annotate every candidate's `is_match` flag in one call.
///
/// Convenience wrapper over [`Matcher`] for callers that hold a config
/// rather than a constructed engine. `query_urls` is the set of URLs found
/// in the query text by the caller's URL-detection utility; when non-empty
/// it selects the URL-equivalence branch for the whole batch.
pub fn match_candidates(
    query_text: &str,
    query_urls: &[String],
    candidates: &mut [MatchCandidate],
    config: &MatchConfig,
) -> Result<(), MatchError> {
    Matcher::new(config.clone())?.annotate(query_text, query_urls, candidates)
}
