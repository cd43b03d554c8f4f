//! # Telemetry
//!
//! Logging bootstrap for processes embedding the gas tracking ledger.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//!
//!     // Keeper spans and events now reach the subscriber
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `gas-tracking` | Service name in logs |
//! | `QC_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `QC_JSON_LOGS` | `false` | JSON output |
//! | `QC_CONSOLE_OUTPUT` | `true` | Console output |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
