//! # Domain Layer
//!
//! Pure domain logic for the gas tracking ledger.
//! No store access here: only records, keys and the leftover arithmetic.
//!
//! ## Modules
//!
//! - `entities` - Ledger records (BlockGasTracking, TransactionTracking, ...)
//! - `keys` - Store key schema
//! - `leftover` - Leftover reward merge and threshold release
//! - `invariants` - Conservation and distribution checks

pub mod entities;
pub mod invariants;
pub mod keys;
pub mod leftover;
