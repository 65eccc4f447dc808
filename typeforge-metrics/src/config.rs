//! Metrics service configuration.

use serde::Deserialize;
use std::time::Duration;

/// Configuration for the metrics service.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Master switch for the whole service.
    #[serde(default)]
    pub enabled: bool,
    /// Enables collector scheduling.
    #[serde(default = "default_true")]
    pub collection_enabled: bool,
    /// Enables publisher scheduling.
    #[serde(default = "default_true")]
    pub publishing_enabled: bool,
    /// Collector names to include (empty means all).
    #[serde(default)]
    pub collection_include: Vec<String>,
    /// Collector names to exclude.
    #[serde(default)]
    pub collection_exclude: Vec<String>,
    /// Publisher names to include (empty means all).
    #[serde(default)]
    pub publishing_include: Vec<String>,
    /// Publisher names to exclude.
    #[serde(default)]
    pub publishing_exclude: Vec<String>,
    /// Grace period to wait for task shutdown, in milliseconds.
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_shutdown_grace_ms() -> u64 {
    5000
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            collection_enabled: true,
            publishing_enabled: true,
            collection_include: Vec::new(),
            collection_exclude: Vec::new(),
            publishing_include: Vec::new(),
            publishing_exclude: Vec::new(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}

impl MetricsConfig {
    /// Returns the shutdown grace period.
    #[must_use]
    pub const fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }

    /// Returns true if a collector with the given name should run.
    #[must_use]
    pub fn collector_enabled(&self, name: &str) -> bool {
        is_enabled(&self.collection_include, &self.collection_exclude, name)
    }

    /// Returns true if a publisher with the given name should run.
    #[must_use]
    pub fn publisher_enabled(&self, name: &str) -> bool {
        is_enabled(&self.publishing_include, &self.publishing_exclude, name)
    }
}

/// Exclusion wins; an include list is advisory, everything else stays
/// permitted (original include/exclude semantics).
fn is_enabled(includes: &[String], excludes: &[String], name: &str) -> bool {
    if excludes.iter().any(|n| n == name) {
        return false;
    }
    if includes.iter().any(|n| n == name) {
        return true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MetricsConfig::default();
        assert!(!config.enabled);
        assert!(config.collection_enabled);
        assert!(config.publishing_enabled);
        assert_eq!(config.shutdown_grace(), Duration::from_millis(5000));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: MetricsConfig =
            serde_json::from_str(r#"{"enabled": true, "collection_exclude": ["noisy"]}"#)
                .expect("parse");
        assert!(config.enabled);
        assert!(config.publishing_enabled);
        assert!(!config.collector_enabled("noisy"));
        assert!(config.collector_enabled("quiet"));
    }

    #[test]
    fn test_exclude_wins() {
        let config = MetricsConfig {
            collection_include: vec!["a".to_string()],
            collection_exclude: vec!["a".to_string()],
            ..MetricsConfig::default()
        };
        assert!(!config.collector_enabled("a"));
    }

    #[test]
    fn test_unlisted_name_is_enabled() {
        let config = MetricsConfig {
            publishing_include: vec!["a".to_string()],
            ..MetricsConfig::default()
        };
        assert!(config.publisher_enabled("a"));
        assert!(config.publisher_enabled("b"));
    }
}
