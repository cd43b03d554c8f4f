//! # Gas Tracking Keeper - Helper Methods
//!
//! Record load/save against the context's store.

use super::GasTrackingKeeper;
use crate::domain::entities::BlockGasTracking;
use crate::domain::keys::KeyPrefix;
use crate::errors::GasTrackingError;
use crate::ports::outbound::{KeyValueStore, RecordCodec};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::Coin;

impl<C: RecordCodec> GasTrackingKeeper<C> {
    /// Load and decode a record, `None` if the key is absent.
    pub(crate) fn load<T: DeserializeOwned, KV: KeyValueStore>(
        &self,
        store: &KV,
        key: &[u8],
    ) -> Result<Option<T>, GasTrackingError> {
        match store.get(key)? {
            Some(bytes) => Ok(Some(self.codec.decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encode and write a record.
    pub(crate) fn save<T: Serialize, KV: KeyValueStore>(
        &self,
        store: &mut KV,
        key: &[u8],
        record: &T,
    ) -> Result<(), GasTrackingError> {
        let bytes = self.codec.encode(record)?;
        store.put(key, &bytes)?;
        Ok(())
    }

    pub(crate) fn load_current_block<KV: KeyValueStore>(
        &self,
        store: &KV,
    ) -> Result<Option<BlockGasTracking>, GasTrackingError> {
        self.load(store, &KeyPrefix::current_block_key())
    }

    pub(crate) fn save_current_block<KV: KeyValueStore>(
        &self,
        store: &mut KV,
        block: &BlockGasTracking,
    ) -> Result<(), GasTrackingError> {
        self.save(store, &KeyPrefix::current_block_key(), block)
    }
}

/// Comma-joined coins for log fields.
pub(crate) fn display_coins(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
