//! Key schema for the ledger's records.

/// Key prefixes for the key-value store.
///
/// All keys are prefixed to namespace different record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// Current block record: `current-block-tracking` -> BlockGasTracking
    CurrentBlockTracking,
    /// Leftover rewards: `reward-entry:{reward_address}` -> LeftOverRewardEntry
    RewardEntry,
    /// Contract metadata: `contract-meta:{contract_address}` -> ContractInstanceMetadata
    ContractMetadata,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::CurrentBlockTracking => b"current-block-tracking",
            KeyPrefix::RewardEntry => b"reward-entry:",
            KeyPrefix::ContractMetadata => b"contract-meta:",
        }
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }

    /// The singleton current-block key.
    pub fn current_block_key() -> Vec<u8> {
        KeyPrefix::CurrentBlockTracking.as_bytes().to_vec()
    }

    /// Build a leftover reward key from a reward address.
    pub fn reward_entry_key(reward_address: &str) -> Vec<u8> {
        KeyPrefix::RewardEntry.key(reward_address.as_bytes())
    }

    /// Build a metadata key from a contract address.
    pub fn contract_metadata_key(contract_address: &str) -> Vec<u8> {
        KeyPrefix::ContractMetadata.key(contract_address.as_bytes())
    }
}
