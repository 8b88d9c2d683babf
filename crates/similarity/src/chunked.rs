//! Windowed LCSS for length-asymmetric input pairs.
//!
//! The primitive's cost is the product of the input lengths. When an article
//! runs tens of kilobytes and the query is a sentence, scanning the article
//! in bounded windows is much cheaper than one full-pair scan, and with the
//! right window geometry it finds the same answer.
//!
//! Two passes over the longer input `b`, windows of `window_factor * |a|`
//! bytes: pass one windows `b` from the start, pass two windows `b[|a|..]`.
//! Any common run is at most `|a|` bytes long, so a run split by a pass-one
//! boundary sits strictly inside one pass-two window (the offset is half the
//! minimum window size). The longest result across both passes is therefore
//! the true LCSS.

use crate::config::ChunkConfig;
use crate::primitive::longest_common_substring;

/// Longest common substring of `a` and `b`, windowing the longer input when
/// the length ratio makes the full-pair primitive wasteful.
///
/// The result length is independent of argument order. Ties are broken by
/// discovery order: pass one before pass two, then window order, matching
/// the primitive's earliest-occurrence rule within a window.
///
/// `cfg` is assumed valid; run [`ChunkConfig::validate`] at configuration
/// time, not per call.
///
/// # Examples
///
/// ```rust
/// use similarity::{longest_common_substring_chunked, ChunkConfig};
///
/// let query = b"needle in here";
/// let haystack = "lots of filler ".repeat(40);
/// let article = format!("{haystack}the needle in here somewhere{haystack}");
///
/// let common =
///     longest_common_substring_chunked(query, article.as_bytes(), &ChunkConfig::default());
/// assert_eq!(common, b"needle in here");
/// ```
pub fn longest_common_substring_chunked<'t>(
    a: &'t [u8],
    b: &'t [u8],
    cfg: &ChunkConfig,
) -> &'t [u8] {
    if a.len() > b.len() {
        return longest_common_substring_chunked(b, a, cfg);
    }
    if a.is_empty() {
        return a;
    }
    if a.len() * cfg.ratio_threshold > b.len() {
        // Lengths are close enough that windowing overhead buys nothing.
        return longest_common_substring(a, b);
    }

    let window = cfg.window_factor * a.len();
    let mut best: &[u8] = &a[..0];

    for chunk in b.chunks(window) {
        let current = longest_common_substring(a, chunk);
        if current.len() > best.len() {
            best = current;
        }
    }

    // Second pass, offset by |a|: recovers runs that straddled a boundary
    // above. A straddling run is <= |a| bytes, so it fits wholly inside one
    // offset window.
    for chunk in b[a.len()..].chunks(window) {
        let current = longest_common_substring(a, chunk);
        if current.len() > best.len() {
            best = current;
        }
    }

    best
}
