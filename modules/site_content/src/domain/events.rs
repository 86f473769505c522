//! Query failure reporting
//!
//! Query operations settle failures into fallback values. Before a failure is
//! swallowed it is handed to a [`FailureReporter`], which is the single place
//! where backend errors become visible:
//! - `TracingFailureReporter`: structured `tracing` error event (default)
//! - `NoOpFailureReporter`: discards failures

use super::query::Collection;
use crate::contract::ContentError;
use chrono::{DateTime, Utc};

/// A query that failed and was replaced by its fallback value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFailure {
    /// Operation name, e.g. `fetch_properties`
    pub operation: &'static str,
    /// Collection the operation reads
    pub collection: Collection,
    /// Technical error
    pub error: ContentError,
    /// When the failure was observed
    pub timestamp: DateTime<Utc>,
}

impl QueryFailure {
    pub fn new(operation: &'static str, collection: Collection, error: ContentError) -> Self {
        Self {
            operation,
            collection,
            error,
            timestamp: Utc::now(),
        }
    }
}

/// Hook receiving every swallowed query failure
pub trait FailureReporter: Send + Sync {
    fn report(&self, failure: &QueryFailure);
}

/// Logs failures as `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureReporter;

impl FailureReporter for TracingFailureReporter {
    fn report(&self, failure: &QueryFailure) {
        tracing::error!(
            operation = failure.operation,
            collection = failure.collection.table(),
            error = %failure.error,
            "content query failed, returning fallback"
        );
    }
}

/// Discards failures
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpFailureReporter;

impl FailureReporter for NoOpFailureReporter {
    fn report(&self, _failure: &QueryFailure) {}
}
