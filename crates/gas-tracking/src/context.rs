//! # Execution Context
//!
//! Per-block state handed to every keeper operation: the height being
//! executed and the store scoped to the in-flight unit of work.
//!
//! A driver that wants rollback-on-abort scopes the context over a
//! `CacheKVStore` and only calls `write()` once the unit of work succeeded.

use crate::ports::outbound::KeyValueStore;

/// Block height plus a mutable borrow of the active store.
pub struct ExecutionContext<'s, KV: KeyValueStore> {
    block_height: u64,
    store: &'s mut KV,
}

impl<'s, KV: KeyValueStore> ExecutionContext<'s, KV> {
    /// Create a context for `block_height` over `store`.
    pub fn new(block_height: u64, store: &'s mut KV) -> Self {
        Self {
            block_height,
            store,
        }
    }

    /// Height of the block being executed.
    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    /// Read access to the store.
    pub fn store(&self) -> &KV {
        &*self.store
    }

    /// Write access to the store.
    pub fn store_mut(&mut self) -> &mut KV {
        &mut *self.store
    }
}

impl<KV: KeyValueStore> std::fmt::Debug for ExecutionContext<'_, KV> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("block_height", &self.block_height)
            .finish_non_exhaustive()
    }
}
