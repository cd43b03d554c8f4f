//! # Shared Types Crate
//!
//! Numeric and coin primitives shared by the gas tracking ledger and the
//! reward-distribution code that consumes it.
//!
//! ## Design Principles
//!
//! - **Fixed point only**: reward remainders are `Dec` (18 fractional digits
//!   over `U256`), never `f64`.
//! - **Unsigned by construction**: amounts cannot go negative; subtraction is
//!   checked and reports `CoinError::Underflow`.
//! - **Deterministic order**: `DecCoins` is always sorted by denom.

pub mod coins;
pub mod decimal;
pub mod errors;

pub use coins::{validate_denom, Coin, DecCoin, DecCoins};
pub use decimal::{Dec, DEC_PRECISION};
pub use errors::CoinError;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;
