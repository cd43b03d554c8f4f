//! # Inbound Ports (Driving Ports)
//!
//! The API the block driver, transaction hooks and query layer call.

use crate::context::ExecutionContext;
use crate::domain::entities::{
    BlockGasTracking, ContractInstanceMetadata, ContractOperation, LeftOverRewardEntry,
};
use crate::errors::GasTrackingError;
use crate::ports::outbound::KeyValueStore;
use shared_types::{Coin, DecCoin};

/// Primary API of the gas tracking ledger.
///
/// Operations are synchronous read-modify-write steps on the store scoped to
/// `ctx`. A failed operation leaves the decision to abort with the caller.
pub trait GasTrackingApi {
    /// Replace the current block record. The previous block's record is
    /// discarded, never merged.
    fn track_new_block<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        record: BlockGasTracking,
    ) -> Result<(), GasTrackingError>;

    /// Append a transaction with an empty call list to the current block.
    ///
    /// ## Errors
    ///
    /// - `BlockTrackingDataNotFound`: no current block and the height is past
    ///   genesis. At or below genesis an empty block is assumed.
    fn track_new_tx<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        max_contract_rewards: Vec<DecCoin>,
        max_gas_allowed: u64,
    ) -> Result<(), GasTrackingError>;

    /// Append a contract call to the current block's last transaction.
    ///
    /// ## Errors
    ///
    /// - `BlockTrackingDataNotFound`: no current block, at any height
    /// - `TxTrackingDataNotFound`: the current block has no transaction
    fn track_contract_gas_usage<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        contract_address: &str,
        gas_used: u64,
        operation: ContractOperation,
        is_eligible_for_reward: bool,
    ) -> Result<(), GasTrackingError>;

    /// Read the current block record.
    ///
    /// ## Errors
    ///
    /// - `BlockTrackingDataNotFound`: no block was tracked yet
    fn get_current_block_tracking_info<KV: KeyValueStore>(
        &self,
        ctx: &ExecutionContext<'_, KV>,
    ) -> Result<BlockGasTracking, GasTrackingError>;

    /// Store metadata for a contract, replacing any previous value.
    fn add_new_contract_metadata<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        contract_address: &str,
        metadata: ContractInstanceMetadata,
    ) -> Result<(), GasTrackingError>;

    /// Read a contract's metadata.
    ///
    /// ## Errors
    ///
    /// - `ContractInstanceMetadataNotFound`: nothing stored for the address
    fn get_new_contract_metadata<KV: KeyValueStore>(
        &self,
        ctx: &ExecutionContext<'_, KV>,
        contract_address: &str,
    ) -> Result<ContractInstanceMetadata, GasTrackingError>;

    /// Merge `contract_rewards` into the address's leftover entry and return
    /// the whole coins that reached `left_over_threshold`, ascending by denom.
    ///
    /// The entry is persisted even when nothing is released.
    fn create_or_merge_left_over_reward_entry<KV: KeyValueStore>(
        &self,
        ctx: &mut ExecutionContext<'_, KV>,
        reward_address: &str,
        contract_rewards: Vec<DecCoin>,
        left_over_threshold: u64,
    ) -> Result<Vec<Coin>, GasTrackingError>;

    /// Read an address's leftover entry.
    ///
    /// ## Errors
    ///
    /// - `RewardEntryNotFound`: no merge ever happened for the address
    fn get_left_over_reward_entry<KV: KeyValueStore>(
        &self,
        ctx: &ExecutionContext<'_, KV>,
        reward_address: &str,
    ) -> Result<LeftOverRewardEntry, GasTrackingError>;
}
