//! Ledger configuration.

use crate::errors::ConfigError;
use std::env;

/// Default genesis height.
pub const DEFAULT_GENESIS_HEIGHT: u64 = 1;

/// Default leftover release threshold, in whole units.
pub const DEFAULT_LEFT_OVER_THRESHOLD: u64 = 1;

/// Configuration for the gas tracking keeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasTrackingConfig {
    /// Height at or below which `track_new_tx` tolerates a missing block
    /// record (default: 1).
    ///
    /// The genesis block runs transactions before any begin-block hook has
    /// recorded a block.
    pub genesis_height: u64,

    /// Threshold used by `GasTrackingKeeper::distribute_left_over_rewards`
    /// (default: 1).
    ///
    /// `0` is valid: every merged denom is released, sub-unit ones as
    /// zero-amount coins.
    pub left_over_threshold: u64,
}

impl Default for GasTrackingConfig {
    fn default() -> Self {
        Self {
            genesis_height: DEFAULT_GENESIS_HEIGHT,
            left_over_threshold: DEFAULT_LEFT_OVER_THRESHOLD,
        }
    }
}

impl GasTrackingConfig {
    /// Set the genesis height.
    #[must_use]
    pub fn with_genesis_height(mut self, height: u64) -> Self {
        self.genesis_height = height;
        self
    }

    /// Set the leftover threshold.
    #[must_use]
    pub fn with_left_over_threshold(mut self, threshold: u64) -> Self {
        self.left_over_threshold = threshold;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GT_GENESIS_HEIGHT`: genesis height (default: 1)
    /// - `GT_LEFTOVER_THRESHOLD`: leftover threshold (default: 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let parse = |var: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvValue { var, value }),
            }
        };

        Ok(Self {
            genesis_height: parse("GT_GENESIS_HEIGHT", DEFAULT_GENESIS_HEIGHT)?,
            left_over_threshold: parse("GT_LEFTOVER_THRESHOLD", DEFAULT_LEFT_OVER_THRESHOLD)?,
        })
    }
}
