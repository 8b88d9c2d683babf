//! # Claimcheck Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` is the decision layer of claimcheck. Given a user query (its
//! raw text plus any URLs extracted from it upstream) and a batch of
//! candidate articles returned by a search service, it flags each candidate
//! as matching or not:
//!
//! - Queries that carry URLs are decided purely by URL equivalence: some
//!   candidate link must denote the same resource as some query link
//!   (`urlcheck`). Text overlap is skipped entirely.
//! - Queries without URLs are decided by whitespace-insensitive longest
//!   common substring overlap (`similarity`), against two named thresholds:
//!   an absolute byte count and a percentage of the query length.
//!
//! ## Core Types
//!
//! - [`MatchCandidate`]: candidate text + attached URLs + the `is_match`
//!   verdict the engine writes.
//! - [`MatchConfig`]: the decision thresholds and chunking strategy.
//! - [`Matcher`]: the validated engine; [`Matcher::decide`] for one
//!   candidate, [`Matcher::annotate`] for a batch.
//!
//! ## Example Usage
//!
//! ```rust
//! use matcher::{MatchCandidate, MatchConfig, Matcher};
//!
//! let engine = Matcher::new(MatchConfig::default()).expect("valid config");
//!
//! let mut candidates = vec![
//!     MatchCandidate::new("they said hello world!! yesterday", vec![]),
//!     MatchCandidate::new("completely unrelated reporting", vec![]),
//! ];
//!
//! engine.annotate("hello world", &[], &mut candidates).expect("non-empty query");
//! assert!(candidates[0].is_match);
//! assert!(!candidates[1].is_match);
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-decision branch, latency, and outcome. This is typically done
//! once during service startup.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, MatchBranch, MatchMetrics};
pub use crate::types::{MatchCandidate, MatchConfig, MatchError};
