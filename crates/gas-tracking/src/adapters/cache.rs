//! Write-buffering overlay store.
//!
//! Reads see buffered writes first and fall back to the parent. `write()`
//! commits every buffered put to the parent in one `atomic_batch_write`;
//! dropping the overlay discards them.

use crate::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::BTreeMap;

/// Overlay over a parent store.
pub struct CacheKVStore<'p, KV: KeyValueStore> {
    parent: &'p mut KV,
    pending: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl<'p, KV: KeyValueStore> CacheKVStore<'p, KV> {
    /// Branch off `parent`.
    pub fn new(parent: &'p mut KV) -> Self {
        Self {
            parent,
            pending: BTreeMap::new(),
        }
    }

    /// Number of buffered writes.
    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }

    /// Commit buffered writes to the parent atomically.
    pub fn write(self) -> Result<(), KVStoreError> {
        let operations: Vec<BatchOperation> = self
            .pending
            .into_iter()
            .map(|(key, value)| BatchOperation::Put { key, value })
            .collect();

        if operations.is_empty() {
            return Ok(());
        }
        self.parent.atomic_batch_write(operations)
    }

    /// Drop buffered writes without touching the parent.
    pub fn discard(self) {}
}

impl<KV: KeyValueStore> KeyValueStore for CacheKVStore<'_, KV> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        match self.pending.get(key) {
            Some(buffered) => Ok(Some(buffered.clone())),
            None => self.parent.get(key),
        }
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.pending.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.pending.insert(key, value);
                }
            }
        }
        Ok(())
    }
}
