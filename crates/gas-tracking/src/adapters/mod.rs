//! # Adapters
//!
//! - `memory` - `InMemoryKVStore`
//! - `cache` - `CacheKVStore` write-buffering overlay
//! - `codec` - `BincodeCodec` (default) and `JsonCodec`

pub mod cache;
pub mod codec;
pub mod memory;

pub use cache::CacheKVStore;
pub use codec::{BincodeCodec, JsonCodec};
pub use memory::InMemoryKVStore;
