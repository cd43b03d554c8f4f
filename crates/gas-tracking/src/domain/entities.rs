//! # Core Domain Entities
//!
//! Records persisted by the gas tracking ledger:
//!
//! - `BlockGasTracking` → `TransactionTracking` → `ContractGasTracking`
//!   (the per-block usage hierarchy)
//! - `ContractInstanceMetadata` (static per-contract reward configuration)
//! - `LeftOverRewardEntry` (sub-threshold reward remainder per reward address)

use serde::{Deserialize, Serialize};
use shared_types::{DecCoin, DecCoins};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// CONTRACT OPERATION
// =============================================================================

/// Classification of a contract call by host entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractOperation {
    /// Not classified.
    #[default]
    Unspecified,
    /// Contract instantiation.
    Instantiation,
    /// Regular execute message.
    Execution,
    /// Smart query.
    Query,
    /// Code migration.
    Migrate,
    /// Privileged sudo entry point.
    Sudo,
    /// Reply to a submessage.
    Reply,
    /// IBC entry points (channel handshake, packets).
    Ibc,
}

impl fmt::Display for ContractOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unspecified => "unspecified",
            Self::Instantiation => "instantiation",
            Self::Execution => "execution",
            Self::Query => "query",
            Self::Migrate => "migrate",
            Self::Sudo => "sudo",
            Self::Reply => "reply",
            Self::Ibc => "ibc",
        };
        f.write_str(name)
    }
}

// =============================================================================
// CONTRACT GAS TRACKING
// =============================================================================

/// Gas consumed by a single contract call. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractGasTracking {
    /// Contract address.
    pub address: String,
    /// Gas consumed by this call.
    pub gas_consumed: u64,
    /// Entry point that was invoked.
    pub operation: ContractOperation,
    /// Whether this call earns the contract owner a reward.
    pub is_eligible_for_reward: bool,
}

// =============================================================================
// TRANSACTION TRACKING
// =============================================================================

/// Per-transaction record. Contract calls are appended in call order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTracking {
    /// Fee caps paid by the transaction, per denom.
    pub max_contract_rewards: Vec<DecCoin>,
    /// Gas limit of the transaction.
    pub max_gas_allowed: u64,
    /// Contract calls made by the transaction, in call order.
    pub contract_tracking_infos: Vec<ContractGasTracking>,
}

impl TransactionTracking {
    /// A fresh record with no contract calls.
    #[must_use]
    pub fn new(max_contract_rewards: Vec<DecCoin>, max_gas_allowed: u64) -> Self {
        Self {
            max_contract_rewards,
            max_gas_allowed,
            contract_tracking_infos: Vec::new(),
        }
    }

    /// Gas consumed by all calls.
    #[must_use]
    pub fn total_gas_consumed(&self) -> u64 {
        self.contract_tracking_infos
            .iter()
            .map(|c| c.gas_consumed)
            .fold(0u64, u64::saturating_add)
    }

    /// Gas consumed by calls flagged as reward eligible.
    #[must_use]
    pub fn eligible_gas_consumed(&self) -> u64 {
        self.contract_tracking_infos
            .iter()
            .filter(|c| c.is_eligible_for_reward)
            .map(|c| c.gas_consumed)
            .fold(0u64, u64::saturating_add)
    }

    /// Reward-eligible gas per contract address, in address order.
    #[must_use]
    pub fn gas_by_contract(&self) -> BTreeMap<String, u64> {
        let mut totals = BTreeMap::new();
        for call in self
            .contract_tracking_infos
            .iter()
            .filter(|c| c.is_eligible_for_reward)
        {
            let total: &mut u64 = totals.entry(call.address.clone()).or_default();
            *total = total.saturating_add(call.gas_consumed);
        }
        totals
    }
}

// =============================================================================
// BLOCK GAS TRACKING
// =============================================================================

/// The current block's record. Exactly one exists at a time; it is replaced
/// wholesale at the start of each block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockGasTracking {
    /// Transactions of this block, in execution order.
    pub tx_tracking_infos: Vec<TransactionTracking>,
}

impl BlockGasTracking {
    /// An empty block record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked transactions.
    #[must_use]
    pub fn tx_count(&self) -> usize {
        self.tx_tracking_infos.len()
    }

    /// The transaction new contract calls are appended to.
    #[must_use]
    pub fn last_transaction(&self) -> Option<&TransactionTracking> {
        self.tx_tracking_infos.last()
    }

    /// Gas consumed across every tracked call in the block.
    #[must_use]
    pub fn total_gas_consumed(&self) -> u64 {
        self.tx_tracking_infos
            .iter()
            .map(TransactionTracking::total_gas_consumed)
            .fold(0u64, u64::saturating_add)
    }
}

// =============================================================================
// CONTRACT INSTANCE METADATA
// =============================================================================

/// Static reward configuration of a contract instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInstanceMetadata {
    /// Address that receives the contract's rewards.
    pub reward_address: String,
    /// Whether gas is rebated to the calling user instead of the owner.
    pub gas_rebate_to_user: bool,
    /// Whether the contract charges a premium on top of gas fees.
    pub collect_premium: bool,
    /// Premium charged, in percent.
    pub premium_percentage_charged: u64,
}

// =============================================================================
// LEFTOVER REWARD ENTRY
// =============================================================================

/// Sub-threshold reward remainder carried between distribution cycles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftOverRewardEntry {
    /// Remainder per denom, sorted by denom.
    pub contract_rewards: DecCoins,
}

// =============================================================================
// TESTS
// =============================================================================
