//! Error types for metrics collection and publishing.

use thiserror::Error;

/// Error type for metrics operations.
///
/// Failures are per-task: one collector or publisher failing never stops
/// the others.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A collector failed to capture a snapshot.
    #[error("collector '{name}' failed: {message}")]
    Collect {
        /// Collector name.
        name: String,
        /// Failure message.
        message: String,
    },

    /// A publisher failed to deliver snapshots.
    #[error("publisher '{name}' failed: {message}")]
    Publish {
        /// Publisher name.
        name: String,
        /// Failure message.
        message: String,
    },
}

impl MetricsError {
    /// Creates a collection error.
    pub fn collect(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Collect {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a publish error.
    pub fn publish(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Publish {
            name: name.into(),
            message: message.into(),
        }
    }
}
