//! Claimcheck similarity layer.
//!
//! This crate measures textual overlap between a query and a candidate
//! document as the longest common substring (LCSS) of their
//! whitespace-stripped bytes. It is deliberately not a linguistic similarity
//! measure: no tokenization, no stemming, no tf-idf. Contiguous byte overlap
//! is a documented approximation that works well for forwarded-message style
//! queries, where matching articles quote the query text verbatim.
//!
//! ## What we provide
//!
//! - [`strip_whitespace`]: removes ASCII spaces, tabs, and line breaks so the
//!   comparison ignores reflowing
//! - [`longest_common_substring`]: the quadratic-time LCSS primitive
//! - [`longest_common_substring_chunked`]: a windowing wrapper that keeps the
//!   primitive affordable when one input is much longer than the other
//! - [`ChunkConfig`]: the named thresholds steering the windowing strategy
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no global state. Same inputs and config, same
//! result on any machine.
//!
//! ## Invariants worth knowing
//!
//! - A non-empty LCSS result appears verbatim as a contiguous run in *both*
//!   inputs.
//! - `longest_common_substring_chunked(a, b)` and
//!   `longest_common_substring_chunked(b, a)` return results of equal length
//!   (the bytes may differ on ties; the tie-break is positional).
//! - For window sizes of at least twice the shorter input, the offset second
//!   pass recovers any common run that straddles a first-pass boundary, so
//!   chunking never shortens the reported overlap.

mod chunked;
mod config;
mod error;
mod primitive;
mod whitespace;

pub use crate::chunked::longest_common_substring_chunked;
pub use crate::config::ChunkConfig;
pub use crate::error::SimilarityError;
pub use crate::primitive::longest_common_substring;
pub use crate::whitespace::strip_whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripped_texts_share_their_common_run() {
        let query = strip_whitespace("hello world");
        let article = strip_whitespace("they said \"hello\nworld!!\" yesterday");

        let common =
            longest_common_substring_chunked(query.as_bytes(), article.as_bytes(), &ChunkConfig::default());
        assert_eq!(common, b"helloworld");
    }

    #[test]
    fn disjoint_texts_share_nothing() {
        let common = longest_common_substring(b"abc", b"xyz");
        assert!(common.is_empty());
    }
}
