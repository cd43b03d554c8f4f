//! # Integration Flows
//!
//! Drive the keeper the way a chain does: begin-block, ante handler, VM hooks
//! and end-block distribution, across several heights and store overlays.

pub mod block_lifecycle;
pub mod leftover_rewards;

use gas_tracking::prelude::*;

/// Default keeper used by the flows.
pub fn keeper() -> GasTrackingKeeper {
    GasTrackingKeeper::new(GasTrackingConfig::default())
}

/// Parse a decimal coin.
pub fn dec_coin(denom: &str, amount: &str) -> DecCoin {
    DecCoin::parse(denom, amount).expect("valid decimal coin")
}

/// Install the test log subscriber once per binary.
pub fn init_test_logging() {
    let config = telemetry::TelemetryConfig::default().with_log_level("gas_tracking=debug");
    // Ignore AlreadyInitialized from concurrent tests
    let _ = telemetry::init_logging(&config);
}
