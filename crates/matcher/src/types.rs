use serde::{Deserialize, Serialize};
use similarity::ChunkConfig;
use thiserror::Error;

/// One document under test against a query.
///
/// Built by the caller from a search result, read-only to the engine except
/// for `is_match`, which the engine writes once per decision. Nothing here
/// is retained beyond the call that reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Candidate document text.
    pub text: String,
    /// URLs attached to the candidate (hyperlinks extracted upstream).
    #[serde(default)]
    pub urls: Vec<String>,
    /// The engine's verdict. Input value is ignored.
    #[serde(default)]
    pub is_match: bool,
}

impl MatchCandidate {
    /// Convenience constructor with the verdict cleared.
    pub fn new(text: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            text: text.into(),
            urls,
            is_match: false,
        }
    }
}

/// Thresholds for the match decision.
///
/// Serde-friendly and cheap to clone so it can sit in service configs. The
/// defaults are the tuned values of the production heuristic; both were once
/// inline literals and are named here so they can be tested and tuned
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// A common substring strictly longer than this many bytes is a match
    /// on its own.
    #[serde(default = "MatchConfig::default_min_common_bytes")]
    pub min_common_bytes: usize,

    /// Alternatively, a common substring covering at least this percentage
    /// of the original query length is a match. The denominator is the
    /// query length *before* whitespace stripping; both thresholds were
    /// tuned against that denominator, so retune them together if changing
    /// it.
    #[serde(default = "MatchConfig::default_min_overlap_percent")]
    pub min_overlap_percent: usize,

    /// Windowing strategy for the underlying substring scan.
    #[serde(default)]
    pub chunk: ChunkConfig,
}

impl MatchConfig {
    pub(crate) fn default_min_common_bytes() -> usize {
        25
    }

    pub(crate) fn default_min_overlap_percent() -> usize {
        80
    }

    /// Validate the configuration for use by a [`Matcher`](crate::Matcher).
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.min_common_bytes == 0 {
            return Err(MatchError::InvalidConfig(
                "min_common_bytes must be >= 1".into(),
            ));
        }
        if self.min_overlap_percent == 0 || self.min_overlap_percent > 100 {
            return Err(MatchError::InvalidConfig(
                "min_overlap_percent must be between 1 and 100".into(),
            ));
        }
        self.chunk
            .validate()
            .map_err(|err| MatchError::InvalidConfig(err.to_string()))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_common_bytes: Self::default_min_common_bytes(),
            min_overlap_percent: Self::default_min_overlap_percent(),
            chunk: ChunkConfig::default(),
        }
    }
}

/// Errors produced by the decision layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The query has no URLs and no text, so neither branch can decide.
    #[error("query text is empty and the query carries no urls")]
    EmptyQuery,
}
