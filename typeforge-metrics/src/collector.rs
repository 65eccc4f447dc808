//! Collector and publisher traits plus the snapshot type.

use crate::error::MetricsError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::time::Duration;

/// One captured set of metric values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSnapshot {
    /// Name of the collector that produced the snapshot.
    pub source: String,
    /// Capture time.
    pub captured_at: DateTime<Utc>,
    /// Metric name to value.
    pub values: BTreeMap<String, f64>,
}

impl MetricSnapshot {
    /// Creates an empty snapshot for a source, stamped now.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            captured_at: Utc::now(),
            values: BTreeMap::new(),
        }
    }

    /// Records a value and returns self.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }
}

/// Periodically samples a set of metric values.
#[async_trait]
pub trait MetricsCollector: Send + Sync {
    /// Collector name used for scheduling filters and logging.
    fn name(&self) -> &str;

    /// Fixed sampling interval.
    fn interval(&self) -> Duration;

    /// Captures one snapshot.
    async fn collect(&self) -> Result<MetricSnapshot, MetricsError>;
}

/// Periodically publishes buffered snapshots to a destination.
#[async_trait]
pub trait MetricsPublisher: Send + Sync {
    /// Publisher name used for scheduling filters and logging.
    fn name(&self) -> &str;

    /// Fixed publishing interval.
    fn interval(&self) -> Duration;

    /// Delivers a batch of snapshots.
    async fn publish(&self, snapshots: &[MetricSnapshot]) -> Result<(), MetricsError>;
}
