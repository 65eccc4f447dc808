//! # Typeforge Metrics
//!
//! Periodic metrics collection and publishing.
//!
//! This crate provides:
//! - Collector/publisher traits with fixed-rate scheduling
//! - A shared snapshot sink
//! - Bounded-grace shutdown

pub mod collector;
pub mod config;
pub mod error;
pub mod service;
pub mod sink;

pub use collector::{MetricSnapshot, MetricsCollector, MetricsPublisher};
pub use config::MetricsConfig;
pub use error::MetricsError;
pub use service::MetricsService;
pub use sink::MetricsSink;
