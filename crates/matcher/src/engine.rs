use std::time::Instant;

use similarity::{longest_common_substring_chunked, strip_whitespace};

use crate::metrics::{metrics_recorder, MatchBranch};
use crate::types::{MatchCandidate, MatchConfig, MatchError};


/// Decision engine for query/candidate matching.
///
/// Stateless across calls: every decision reads only its own inputs and
/// writes only the candidate's `is_match` flag, so candidates may be
/// processed in parallel by the caller without synchronization.
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Construct a matcher, validating the configuration up front.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this matcher was built with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Decide whether `candidate` matches the query.
    ///
    /// With `query_urls` present, the decision is purely link-based: does
    /// any candidate URL denote the same resource as any query URL?
    /// Substring overlap is not consulted at all in that branch.
    ///
    /// Without query URLs, both texts are whitespace-stripped and the
    /// longest common substring decides: a run strictly longer than
    /// `min_common_bytes`, or covering `min_overlap_percent` of the
    /// original query length, is a match.
    ///
    /// # Errors
    ///
    /// [`MatchError::EmptyQuery`] when the text branch would run with an
    /// empty query (the overlap ratio is undefined there).
    pub fn decide(
        &self,
        query_text: &str,
        query_urls: &[String],
        candidate: &MatchCandidate,
    ) -> Result<bool, MatchError> {
        let start = Instant::now();

        if !query_urls.is_empty() {
            let matched = urlcheck::exists_equivalent(&candidate.urls, query_urls);
            tracing::debug!(
                matched,
                candidate_urls = candidate.urls.len(),
                query_urls = query_urls.len(),
                "url equivalence branch"
            );
            if let Some(recorder) = metrics_recorder() {
                recorder.record_decision(MatchBranch::Url, start.elapsed(), matched);
            }
            return Ok(matched);
        }

        if query_text.is_empty() {
            return Err(MatchError::EmptyQuery);
        }

        let query = strip_whitespace(query_text);
        let text = strip_whitespace(&candidate.text);
        let common =
            longest_common_substring_chunked(query.as_bytes(), text.as_bytes(), &self.config.chunk);

        // Ratio over the original query length, not the stripped one.
        let overlap_percent = common.len() * 100 / query_text.len();
        let matched = common.len() > self.config.min_common_bytes
            || overlap_percent >= self.config.min_overlap_percent;

        tracing::debug!(
            matched,
            common_bytes = common.len(),
            overlap_percent,
            "substring overlap branch"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_decision(MatchBranch::Text, start.elapsed(), matched);
        }
        Ok(matched)
    }

    /// Write a verdict into every candidate's `is_match` flag.
    ///
    /// Validates once up front so a bad query fails before any candidate is
    /// touched; after that, per-candidate work cannot abort the batch.
    pub fn annotate(
        &self,
        query_text: &str,
        query_urls: &[String],
        candidates: &mut [MatchCandidate],
    ) -> Result<(), MatchError> {
        if query_urls.is_empty() && query_text.is_empty() {
            return Err(MatchError::EmptyQuery);
        }

        for candidate in candidates.iter_mut() {
            candidate.is_match = self.decide(query_text, query_urls, candidate)?;
        }
        Ok(())
    }
}
