//! Structured logging setup.
//!
//! JSON logs carry consistent fields that log shippers can parse:
//! - `timestamp`, `level`, `target`
//! - `service`: from `TelemetryConfig::service_name`
//! - span fields (`height`, `reward_address`, ...) from instrumented calls

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Safe to call more than once: later calls return
/// `TelemetryError::AlreadyInitialized` and leave the first subscriber in
/// place.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if !config.console_output {
        registry.try_init()
    } else if config.json_logs {
        // JSON output for containers/production
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        registry.with(json_layer).try_init()
    } else {
        // Pretty output for development
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);
        registry.with(fmt_layer).try_init()
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "logging initialized"
    );
    Ok(())
}
