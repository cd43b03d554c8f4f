//! # Error Types
//!
//! Errors produced by decimal arithmetic and coin validation.

use thiserror::Error;

/// Errors that can occur while building or combining coin amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinError {
    /// Input is not a valid unsigned decimal literal.
    #[error("Invalid decimal: {0:?}")]
    InvalidDecimal(String),

    /// Input carries more fractional digits than `Dec` can represent.
    #[error("Too many fractional digits: {digits} > {max}")]
    TooManyFractionalDigits { digits: usize, max: usize },

    /// Amounts are unsigned; a leading minus sign is rejected.
    #[error("Negative amount: {0:?}")]
    NegativeAmount(String),

    /// Addition or scaling exceeded the 256-bit range.
    #[error("Decimal overflow")]
    Overflow,

    /// Subtraction would produce a negative amount.
    #[error("Decimal underflow")]
    Underflow,

    /// Denomination does not match the accepted pattern.
    #[error("Invalid denom: {0:?}")]
    InvalidDenom(String),
}
