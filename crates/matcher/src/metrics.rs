//! Pluggable observability for match decisions.
//!
//! The engine records one event per decision through an optional global
//! recorder, installed once at service startup. No recorder, no overhead
//! beyond a lock-free read.

use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

/// Which branch of the decision policy handled a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBranch {
    /// Query carried URLs; decided by URL equivalence.
    Url,
    /// No query URLs; decided by substring overlap.
    Text,
}

/// Metrics observer for the decision engine.
pub trait MatchMetrics: Send + Sync {
    fn record_decision(&self, branch: MatchBranch, latency: Duration, matched: bool);
}

/// Install or clear the global decision metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}
