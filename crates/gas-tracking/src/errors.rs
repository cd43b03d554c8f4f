//! # Error Types
//!
//! All error types for the gas tracking ledger.
//!
//! Every ledger operation returns `Result<_, GasTrackingError>`. Nothing is
//! retried or swallowed here; the block driver or query layer decides whether
//! to abort the block, abort the transaction or reject the query.

use shared_types::CoinError;
use thiserror::Error;

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors returned by ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GasTrackingError {
    /// No current block record exists.
    #[error("block tracking data not found")]
    BlockTrackingDataNotFound,

    /// The current block has no transaction to append a contract call to.
    #[error("transaction tracking data not found")]
    TxTrackingDataNotFound,

    /// No leftover reward entry was ever merged for this address.
    #[error("reward entry not found for address: {reward_address}")]
    RewardEntryNotFound { reward_address: String },

    /// No metadata was stored for this contract.
    #[error("contract instance metadata not found for address: {contract_address}")]
    ContractInstanceMetadataNotFound { contract_address: String },

    /// Record could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Underlying store failed.
    #[error("store error: {0}")]
    Store(#[from] KVStoreError),

    /// Decimal arithmetic failed while merging rewards.
    #[error("coin error: {0}")]
    Coin(#[from] CoinError),
}

impl GasTrackingError {
    /// Returns true for the four "entity absent" kinds.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BlockTrackingDataNotFound
                | Self::TxTrackingDataNotFound
                | Self::RewardEntryNotFound { .. }
                | Self::ContractInstanceMetadataNotFound { .. }
        )
    }
}

// =============================================================================
// CODEC ERRORS
// =============================================================================

/// Serialization failure. Treated as fatal: it means store corruption or a
/// schema mismatch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Encoding a record failed.
    #[error("failed to encode {record}: {message}")]
    Encode {
        record: &'static str,
        message: String,
    },

    /// Decoding stored bytes failed.
    #[error("failed to decode {record}: {message}")]
    Decode {
        record: &'static str,
        message: String,
    },
}

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Key-value store errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable holds a value that does not parse.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnvValue { var: &'static str, value: String },
}

// =============================================================================
// TESTS
// =============================================================================
