//! # Gas Tracking Keeper
//!
//! The service implementing `GasTrackingApi`.
//!
//! The keeper owns no state: every record lives in the store reached through
//! the `ExecutionContext` handed to each call. It holds only the codec and
//! configuration, so one keeper serves every block.

mod api;
mod helpers;

use crate::adapters::codec::BincodeCodec;
use crate::config::GasTrackingConfig;
use crate::context::ExecutionContext;
use crate::errors::GasTrackingError;
use crate::ports::inbound::GasTrackingApi;
use crate::ports::outbound::{KeyValueStore, RecordCodec};
use shared_types::{Coin, DecCoin};

/// The gas tracking keeper.
#[derive(Debug, Clone, Default)]
pub struct GasTrackingKeeper<C: RecordCodec = BincodeCodec> {
    /// Record codec.
    pub(crate) codec: C,
    /// Keeper configuration.
    pub(crate) config: GasTrackingConfig,
}

impl GasTrackingKeeper<BincodeCodec> {
    /// Create a keeper using the default bincode codec.
    pub fn new(config: GasTrackingConfig) -> Self {
        Self::with_codec(BincodeCodec, config)
    }
}

impl<C: RecordCodec> GasTrackingKeeper<C> {
    /// Create a keeper with an explicit codec.
    pub fn with_codec(codec: C, config: GasTrackingConfig) -> Self {
        Self { codec, config }
    }

    /// Keeper configuration.
    pub fn config(&self) -> &GasTrackingConfig {
        &self.config
    }
    /// End-block entry point: merge `contract_rewards` for `reward_address`
    /// at the configured `left_over_threshold`.
    pub fn distribute_left_over_rewards<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        reward_address: &str,
        contract_rewards: Vec<DecCoin>,
    ) -> Result<Vec<Coin>, GasTrackingError> {
        self.create_or_merge_left_over_reward_entry(
            ctx,
            reward_address,
            contract_rewards,
            self.config.left_over_threshold,
        )
    }
}
