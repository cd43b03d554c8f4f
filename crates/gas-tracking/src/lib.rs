//! # Gas Tracking - Contract Gas Ledger and Leftover Rewards
//!
//! ## Purpose
//!
//! Records how much gas each smart-contract invocation consumed during block
//! execution, organised as block → transactions → contract calls, so an
//! end-of-block routine can turn fees into rewards for contract owners. Stores
//! per-contract reward metadata, and batches fractional rewards into whole
//! coins once they cross a threshold.
//!
//! ```text
//! begin-block ──► track_new_block ──► current-block-tracking
//! ante handler ─► track_new_tx ─────►   └─ tx[n] (fee caps, gas limit)
//! host VM ──────► track_contract_gas_usage ─► tx[last].calls[..]
//!
//! end-block ───► create_or_merge_left_over_reward_entry ──► reward-entry:<addr>
//!                      └─► whole coins >= threshold
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Single current block record | `domain/keys.rs` - singleton key |
//! | Append to last transaction | `service/api.rs` - `track_contract_gas_usage()` |
//! | Remainder conservation | `domain/invariants.rs` - `check_conservation_invariant()` |
//! | Integral, ordered release | `domain/invariants.rs` - `check_distribution_integral()` |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Records, key schema, leftover merge, invariants
//! - `ports/` - `GasTrackingApi` (inbound), `KeyValueStore` and `RecordCodec` (outbound)
//! - `adapters/` - In-memory store, overlay store, codecs
//! - `service/` - `GasTrackingKeeper`
//!
//! ## Usage
//!
//! ```ignore
//! use gas_tracking::prelude::*;
//!
//! let keeper = GasTrackingKeeper::new(GasTrackingConfig::default());
//! let mut store = InMemoryKVStore::new();
//! let mut ctx = ExecutionContext::new(2, &mut store);
//!
//! keeper.track_new_block(&mut ctx, BlockGasTracking::new())?;
//! keeper.track_new_tx(&mut ctx, fee_caps, 200_000)?;
//! keeper.track_contract_gas_usage(&mut ctx, "contract1", 42_000, ContractOperation::Execution, true)?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod context;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{
        BlockGasTracking, ContractGasTracking, ContractInstanceMetadata, ContractOperation,
        LeftOverRewardEntry, TransactionTracking,
    };

    // Domain logic
    pub use crate::domain::invariants::{
        check_all_invariants, check_conservation_invariant, check_distribution_integral,
        check_remainder_below_unit, InvariantCheckResult, InvariantViolation,
    };
    pub use crate::domain::keys::KeyPrefix;
    pub use crate::domain::leftover::{merge_left_over, LeftOverMerge};

    // Ports
    pub use crate::ports::inbound::GasTrackingApi;
    pub use crate::ports::outbound::{BatchOperation, KeyValueStore, RecordCodec};

    // Adapters
    pub use crate::adapters::{BincodeCodec, CacheKVStore, InMemoryKVStore, JsonCodec};

    // Service, context, config
    pub use crate::config::GasTrackingConfig;
    pub use crate::context::ExecutionContext;
    pub use crate::service::GasTrackingKeeper;

    // Errors
    pub use crate::errors::{CodecError, ConfigError, GasTrackingError, KVStoreError};

    // Numeric primitives
    pub use shared_types::{Coin, CoinError, Dec, DecCoin, DecCoins};
}

// Re-export main types at crate root
pub use prelude::*;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
