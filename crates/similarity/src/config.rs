//! Configuration for the chunked LCSS strategy.
//!
//! The two knobs here were magic numbers in the heuristic this engine grew
//! out of. They are named so they can be tuned and tested independently, but
//! the defaults are the values the heuristic shipped with.

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// Controls when and how [`longest_common_substring_chunked`] windows the
/// longer input instead of running the primitive over the full pair.
///
/// [`longest_common_substring_chunked`]: crate::longest_common_substring_chunked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Chunking kicks in only when `shorter * ratio_threshold <= longer`.
    /// Below that length ratio the windowing overhead costs more than the
    /// quadratic scan it avoids.
    #[serde(default = "ChunkConfig::default_ratio_threshold")]
    pub ratio_threshold: usize,

    /// Window size as a multiple of the shorter input's length. Must be at
    /// least 2: the offset second pass only recovers boundary-straddling
    /// runs when each window holds two copies of the shorter input.
    #[serde(default = "ChunkConfig::default_window_factor")]
    pub window_factor: usize,
}

impl ChunkConfig {
    pub(crate) fn default_ratio_threshold() -> usize {
        6
    }

    pub(crate) fn default_window_factor() -> usize {
        2
    }

    /// Validate the configuration before handing it to the chunked scan.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.ratio_threshold == 0 {
            return Err(SimilarityError::InvalidConfig(
                "ratio_threshold must be >= 1".into(),
            ));
        }
        if self.window_factor < 2 {
            return Err(SimilarityError::InvalidConfig(
                "window_factor must be >= 2 so offset windows cover chunk boundaries".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            ratio_threshold: Self::default_ratio_threshold(),
            window_factor: Self::default_window_factor(),
        }
    }
}
