//! Shared snapshot buffer between collectors and publishers.

use crate::collector::MetricSnapshot;
use parking_lot::RwLock;
use std::sync::Arc;

/// Buffer that collector tasks push into and publisher tasks drain.
///
/// Cheap to clone; clones share the underlying buffer.
#[derive(Debug, Clone, Default)]
pub struct MetricsSink {
    inner: Arc<RwLock<Vec<MetricSnapshot>>>,
}

impl MetricsSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot.
    pub fn push(&self, snapshot: MetricSnapshot) {
        self.inner.write().push(snapshot);
    }

    /// Removes and returns all buffered snapshots.
    #[must_use]
    pub fn drain(&self) -> Vec<MetricSnapshot> {
        std::mem::take(&mut *self.inner.write())
    }

    /// Returns the number of buffered snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
