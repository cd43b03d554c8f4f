//! Telemetry configuration from environment variables.

use std::env;

/// Default service name.
pub const DEFAULT_SERVICE_NAME: &str = "gas-tracking";

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or full
    /// `EnvFilter` directive
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to write logs to the console at all
    pub console_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            console_output: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OTEL_SERVICE_NAME`: Service name (default: gas-tracking)
    /// - `QC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `QC_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    /// - `QC_CONSOLE_OUTPUT`: Enable console output (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let is_container =
            lookup("KUBERNETES_SERVICE_HOST").is_some() || lookup("DOCKER_CONTAINER").is_some();

        Self {
            service_name: lookup("OTEL_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),

            log_level: lookup("QC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),

            json_logs: lookup("QC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),

            console_output: lookup("QC_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    /// Set the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable or disable JSON output.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }
}
