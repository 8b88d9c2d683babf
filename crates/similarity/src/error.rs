use thiserror::Error;

/// Errors produced by the similarity layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("invalid chunk configuration: {0}")]
    InvalidConfig(String),
}
