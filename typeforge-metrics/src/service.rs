//! The metrics service: fixed-rate scheduling of collectors and publishers.
//!
//! Each registered sampler/publisher runs as its own fixed-rate task; one
//! task's failure does not affect the others. Shutdown waits up to a
//! bounded grace period before aborting what is left.

use crate::collector::{MetricsCollector, MetricsPublisher};
use crate::config::MetricsConfig;
use crate::sink::MetricsSink;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Schedules metrics collection and publishing at fixed rates.
pub struct MetricsService {
    config: MetricsConfig,
    collectors: Vec<Arc<dyn MetricsCollector>>,
    publishers: Vec<Arc<dyn MetricsPublisher>>,
    sink: MetricsSink,
    tasks: Vec<JoinHandle<()>>,
    shutdown_tx: Option<watch::Sender<bool>>,
}

impl MetricsService {
    /// Creates a service with the given configuration.
    #[must_use]
    pub fn new(config: MetricsConfig) -> Self {
        Self {
            config,
            collectors: Vec::new(),
            publishers: Vec::new(),
            sink: MetricsSink::new(),
            tasks: Vec::new(),
            shutdown_tx: None,
        }
    }

    /// Registers a collector.
    pub fn register_collector<C: MetricsCollector + 'static>(&mut self, collector: C) {
        self.collectors.push(Arc::new(collector));
    }

    /// Registers a publisher.
    pub fn register_publisher<P: MetricsPublisher + 'static>(&mut self, publisher: P) {
        self.publishers.push(Arc::new(publisher));
    }

    /// Returns the shared sink collectors feed into.
    #[must_use]
    pub fn sink(&self) -> MetricsSink {
        self.sink.clone()
    }

    /// Returns the number of running tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Starts one fixed-rate task per enabled collector and publisher.
    ///
    /// Disabled service or filtered-out names schedule nothing.
    pub fn start(&mut self) {
        if !self.config.enabled {
            tracing::info!("metrics disabled, not scheduling anything");
            return;
        }

        let (tx, rx) = watch::channel(false);
        self.shutdown_tx = Some(tx);

        if self.config.collection_enabled {
            for collector in &self.collectors {
                if !self.config.collector_enabled(collector.name()) {
                    continue;
                }
                tracing::debug!(
                    "scheduling collector '{}' at fixed interval {:?}",
                    collector.name(),
                    collector.interval()
                );
                self.tasks.push(spawn_collector(
                    Arc::clone(collector),
                    self.sink.clone(),
                    rx.clone(),
                ));
            }
        }

        if self.config.publishing_enabled {
            for publisher in &self.publishers {
                if !self.config.publisher_enabled(publisher.name()) {
                    continue;
                }
                tracing::debug!(
                    "scheduling publisher '{}' at fixed interval {:?}",
                    publisher.name(),
                    publisher.interval()
                );
                self.tasks.push(spawn_publisher(
                    Arc::clone(publisher),
                    self.sink.clone(),
                    rx.clone(),
                ));
            }
        }
    }

    /// Signals shutdown and waits up to the configured grace period.
    ///
    /// Tasks still running when the grace expires are aborted.
    pub async fn stop(&mut self) {
        tracing::debug!("stopping metrics service");

        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
        }

        let grace = self.config.shutdown_grace();
        for mut task in self.tasks.drain(..) {
            if tokio::time::timeout(grace, &mut task).await.is_err() {
                tracing::error!("timed out waiting for a metrics task to shut down, aborting it");
                task.abort();
            }
        }
    }
}

fn spawn_collector(
    collector: Arc<dyn MetricsCollector>,
    sink: MetricsSink,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(collector.interval());
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match collector.collect().await {
                        Ok(snapshot) => sink.push(snapshot),
                        Err(err) => tracing::warn!("{err}"),
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }
    })
}

fn spawn_publisher(
    publisher: Arc<dyn MetricsPublisher>,
    sink: MetricsSink,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(publisher.interval());
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let snapshots = sink.drain();
                    if snapshots.is_empty() {
                        continue;
                    }
                    if let Err(err) = publisher.publish(&snapshots).await {
                        tracing::warn!("{err}");
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }
    })
}
