//! # Gas Tracking API Implementation

use super::helpers::display_coins;
use super::GasTrackingKeeper;
use crate::context::ExecutionContext;
use crate::domain::entities::{
    BlockGasTracking, ContractGasTracking, ContractInstanceMetadata, ContractOperation,
    LeftOverRewardEntry, TransactionTracking,
};
use crate::domain::invariants::check_all_invariants;
use crate::domain::keys::KeyPrefix;
use crate::domain::leftover::merge_left_over;
use crate::errors::GasTrackingError;
use crate::ports::inbound::GasTrackingApi;
use crate::ports::outbound::{KeyValueStore, RecordCodec};
use shared_types::{Coin, DecCoin};
use tracing::{debug, info, instrument, warn};

impl<C: RecordCodec> GasTrackingApi for GasTrackingKeeper<C> {
    #[instrument(level = "debug", skip(self, ctx, record), fields(height = ctx.block_height()))]
    fn track_new_block<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        record: BlockGasTracking,
    ) -> Result<(), GasTrackingError> {
        self.save_current_block(ctx.store_mut(), &record)?;
        debug!(
            height = ctx.block_height(),
            tx_count = record.tx_count(),
            "tracked new block"
        );
        Ok(())
    }

    #[instrument(level = "debug", skip(self, ctx, max_contract_rewards))]
    fn track_new_tx<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        max_contract_rewards: Vec<DecCoin>,
        max_gas_allowed: u64,
    ) -> Result<(), GasTrackingError> {
        let height = ctx.block_height();

        let mut block = match self.load_current_block(ctx.store())? {
            Some(block) => block,
            None if height <= self.config.genesis_height => {
                warn!(
                    height,
                    genesis_height = self.config.genesis_height,
                    "no block tracking record at genesis, starting from an empty block"
                );
                BlockGasTracking::new()
            }
            None => return Err(GasTrackingError::BlockTrackingDataNotFound),
        };

        block
            .tx_tracking_infos
            .push(TransactionTracking::new(max_contract_rewards, max_gas_allowed));
        let tx_index = block.tx_count() - 1;

        self.save_current_block(ctx.store_mut(), &block)?;
        debug!(height, tx_index, max_gas_allowed, "tracked new transaction");
        Ok(())
    }

    #[instrument(level = "debug", skip(self, ctx))]
    fn track_contract_gas_usage<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        contract_address: &str,
        gas_used: u64,
        operation: ContractOperation,
        is_eligible_for_reward: bool,
    ) -> Result<(), GasTrackingError> {
        let height = ctx.block_height();

        let mut block = self
            .load_current_block(ctx.store())?
            .ok_or(GasTrackingError::BlockTrackingDataNotFound)?;
        let tx_index = block.tx_count().saturating_sub(1);

        let tx = block
            .tx_tracking_infos
            .last_mut()
            .ok_or(GasTrackingError::TxTrackingDataNotFound)?;
        tx.contract_tracking_infos.push(ContractGasTracking {
            address: contract_address.to_string(),
            gas_consumed: gas_used,
            operation,
            is_eligible_for_reward,
        });

        self.save_current_block(ctx.store_mut(), &block)?;
        debug!(
            height,
            tx_index,
            contract = contract_address,
            gas_used,
            %operation,
            "tracked contract gas usage"
        );
        Ok(())
    }

    fn get_current_block_tracking_info<KV: KeyValueStore>(
        &self,
        ctx: &ExecutionContext<'_, KV>,
    ) -> Result<BlockGasTracking, GasTrackingError> {
        self.load_current_block(ctx.store())?
            .ok_or(GasTrackingError::BlockTrackingDataNotFound)
    }

    #[instrument(level = "debug", skip(self, ctx, metadata))]
    fn add_new_contract_metadata<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        contract_address: &str,
        metadata: ContractInstanceMetadata,
    ) -> Result<(), GasTrackingError> {
        let key = KeyPrefix::contract_metadata_key(contract_address);
        self.save(ctx.store_mut(), &key, &metadata)?;
        debug!(
            contract = contract_address,
            reward_address = %metadata.reward_address,
            "stored contract metadata"
        );
        Ok(())
    }

    fn get_new_contract_metadata<KV: KeyValueStore>(
        &self,
        ctx: &ExecutionContext<'_, KV>,
        contract_address: &str,
    ) -> Result<ContractInstanceMetadata, GasTrackingError> {
        let key = KeyPrefix::contract_metadata_key(contract_address);
        self.load(ctx.store(), &key)?
            .ok_or_else(|| GasTrackingError::ContractInstanceMetadataNotFound {
                contract_address: contract_address.to_string(),
            })
    }

    #[instrument(level = "debug", skip(self, ctx, contract_rewards))]
    fn create_or_merge_left_over_reward_entry<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        reward_address: &str,
        contract_rewards: Vec<DecCoin>,
        left_over_threshold: u64,
    ) -> Result<Vec<Coin>, GasTrackingError> {
        let height = ctx.block_height();
        let key = KeyPrefix::reward_entry_key(reward_address);

        let existing: Option<LeftOverRewardEntry> = self.load(ctx.store(), &key)?;
        let merge = merge_left_over(existing, contract_rewards, left_over_threshold)?;
        debug_assert!(check_all_invariants(&merge, left_over_threshold).is_valid());

        self.save(ctx.store_mut(), &key, &merge.entry)?;

        debug!(
            height,
            reward_address,
            remaining = %merge.entry.contract_rewards,
            "merged leftover rewards"
        );
        if !merge.distributed.is_empty() {
            info!(
                height,
                reward_address,
                threshold = left_over_threshold,
                coins = %display_coins(&merge.distributed),
                "leftover rewards crossed threshold"
            );
        }

        Ok(merge.distributed)
    }

    fn get_left_over_reward_entry<KV: KeyValueStore>(
        &self,
        ctx: &ExecutionContext<'_, KV>,
        reward_address: &str,
    ) -> Result<LeftOverRewardEntry, GasTrackingError> {
        let key = KeyPrefix::reward_entry_key(reward_address);
        self.load(ctx.store(), &key)?
            .ok_or_else(|| GasTrackingError::RewardEntryNotFound {
                reward_address: reward_address.to_string(),
            })
    }
}
