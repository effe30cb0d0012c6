//! # Causelist Telemetry
//!
//! Observability for the causelist service: structured logging setup and
//! in-process request counters surfaced by the status endpoint.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::RequestMetrics;

/// Configuration for telemetry.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name recorded in the startup log line.
    pub service_name: String,
    /// Log level.
    pub log_level: String,
    /// Enable JSON logging.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// Creates a new telemetry configuration.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enables JSON logging.
    #[must_use]
    pub fn with_json_logs(mut self) -> Self {
        self.json_logs = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TelemetryConfig::new("causelist");
        assert_eq!(config.service_name, "causelist");
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_config_builders() {
        let config = TelemetryConfig::new("causelist")
            .with_log_level("debug")
            .with_json_logs();
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
    }
}
