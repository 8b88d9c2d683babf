use thiserror::Error;

/// Errors produced while comparing URLs.
///
/// Scoped to a single comparison: callers scanning many URL pairs treat a
/// malformed URL as "not equivalent" for that pairing and keep going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlCompareError {
    #[error("malformed url {url:?}: {source}")]
    Malformed {
        url: String,
        source: url::ParseError,
    },
}
