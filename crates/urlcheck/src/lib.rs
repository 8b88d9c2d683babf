//! Claimcheck URL equivalence layer.
//!
//! Two URLs are "equivalent" here when they plausibly denote the same
//! resource for rumor-matching purposes: same host, same path up to one
//! trailing slash, and every query parameter of the query-side URL present
//! with the same value on the candidate side. Extra candidate-side
//! parameters (tracking junk, pagination) are ignored.
//!
//! The relation is deliberately directional on query parameters — see
//! [`equivalent`] — and malformed URLs are a per-comparison error, never a
//! batch-level failure.

mod compare;
mod error;

pub use crate::compare::{equivalent, exists_equivalent};
pub use crate::error::UrlCompareError;
