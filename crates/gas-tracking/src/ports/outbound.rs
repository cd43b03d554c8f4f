//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the gas tracking keeper.
//!
//! These are the interfaces the host application provides: a byte-oriented
//! key-value store and a record codec.

use crate::errors::{CodecError, KVStoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Abstract interface for key-value store operations.
///
/// Production: the host chain's transactional store.
/// Testing: `InMemoryKVStore`, optionally wrapped in a `CacheKVStore`.
pub trait KeyValueStore {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Execute an atomic batch write.
    ///
    /// Either ALL operations in the batch succeed, or NONE are applied.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Batch operation for atomic writes.
///
/// Ledger records are overwritten, never removed, so a batch only carries
/// puts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The key this operation touches.
    pub fn key(&self) -> &[u8] {
        match self {
            BatchOperation::Put { key, .. } => key,
        }
    }
}

/// Abstract interface for record serialization.
///
/// Encoding must be deterministic: equal records produce equal bytes on every
/// node.
pub trait RecordCodec {
    /// Serialize a record to bytes.
    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, CodecError>;

    /// Deserialize bytes into a record.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// Short type name used in codec error messages.
pub(crate) fn record_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
