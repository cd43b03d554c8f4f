//! Heap-backed ledger store.
//!
//! Holds the three record families side by side: the current block record,
//! per-address reward entries and per-contract metadata. Keys are kept
//! ordered so `keys()` lists them deterministically.

use crate::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::BTreeMap;

/// Ledger store living in process memory.
///
/// `Clone` gives a cheap snapshot, which benchmarks use to replay the same
/// starting state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryKVStore {
    records: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryKVStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored keys in ascending byte order.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.records.keys().map(Vec::as_slice)
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.records.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        // Infallible inserts: the batch lands whole.
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.records.insert(key, value);
                }
            }
        }
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.records.contains_key(key))
    }
}
