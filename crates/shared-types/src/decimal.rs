//! # Fixed-Point Decimal
//!
//! `Dec` is an unsigned decimal with 18 fractional digits, stored as a count
//! of atto-units (10^-18) in a `U256`. There is no binary floating point
//! anywhere in reward accounting; every node must truncate the same way.
//!
//! Serialized form is the canonical decimal string (`"7.500000000000000000"`),
//! which keeps both binary and JSON encodings deterministic.

use crate::errors::CoinError;
use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by `Dec`.
pub const DEC_PRECISION: usize = 18;

/// 10^18, the atto-units in one whole unit.
fn precision_multiplier() -> U256 {
    U256::exp10(DEC_PRECISION)
}

/// Unsigned fixed-point decimal with 18 digits of precision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dec(U256);

impl Dec {
    /// Zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    /// One whole unit.
    #[must_use]
    pub fn one() -> Self {
        Self(precision_multiplier())
    }

    /// Build from a whole number of units.
    #[must_use]
    pub fn from_int(units: u64) -> Self {
        // u64::MAX * 10^18 fits comfortably in 256 bits
        Self(U256::from(units) * precision_multiplier())
    }

    /// Build from a whole number of units held in a `U256`.
    pub fn from_int_u256(units: U256) -> Result<Self, CoinError> {
        units
            .checked_mul(precision_multiplier())
            .map(Self)
            .ok_or(CoinError::Overflow)
    }

    /// Build from a raw atto-unit count.
    #[must_use]
    pub const fn from_atto(atto: U256) -> Self {
        Self(atto)
    }

    /// Raw atto-unit count.
    #[must_use]
    pub const fn atto(&self) -> U256 {
        self.0
    }

    /// Parse an unsigned decimal literal such as `"12"`, `"7.5"` or `"0.000001"`.
    pub fn parse(input: &str) -> Result<Self, CoinError> {
        let s = input.trim();
        if s.starts_with('-') {
            return Err(CoinError::NegativeAmount(input.to_string()));
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (s, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty()
            || !is_digits(int_part)
            || !is_digits(frac_part)
            || (s.contains('.') && frac_part.is_empty())
        {
            return Err(CoinError::InvalidDecimal(input.to_string()));
        }
        if frac_part.len() > DEC_PRECISION {
            return Err(CoinError::TooManyFractionalDigits {
                digits: frac_part.len(),
                max: DEC_PRECISION,
            });
        }

        let whole = U256::from_dec_str(int_part).map_err(|_| CoinError::Overflow)?;
        let whole = whole
            .checked_mul(precision_multiplier())
            .ok_or(CoinError::Overflow)?;

        let fraction = if frac_part.is_empty() {
            U256::zero()
        } else {
            // frac_part has at most 18 digits, so this always fits
            let digits = U256::from_dec_str(frac_part)
                .map_err(|_| CoinError::InvalidDecimal(input.to_string()))?;
            digits * U256::exp10(DEC_PRECISION - frac_part.len())
        };

        whole
            .checked_add(fraction)
            .map(Self)
            .ok_or(CoinError::Overflow)
    }

    /// Checked addition.
    pub fn checked_add(self, other: Self) -> Result<Self, CoinError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(CoinError::Overflow)
    }

    /// Checked subtraction. Fails rather than going negative.
    pub fn checked_sub(self, other: Self) -> Result<Self, CoinError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(CoinError::Underflow)
    }

    /// Floor to whole units, keeping the `Dec` representation.
    #[must_use]
    pub fn truncate(self) -> Self {
        let unit = precision_multiplier();
        Self((self.0 / unit) * unit)
    }

    /// Whole units, discarding the fractional part.
    #[must_use]
    pub fn truncate_int(self) -> U256 {
        self.0 / precision_multiplier()
    }

    /// The sub-unit remainder (`self - self.truncate()`).
    #[must_use]
    pub fn fraction(self) -> Self {
        Self(self.0 % precision_multiplier())
    }

    /// Returns true if the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // fraction < 10^18 always fits in a u64
        write!(
            f,
            "{}.{:0width$}",
            self.truncate_int(),
            self.fraction().0.low_u64(),
            width = DEC_PRECISION
        )
    }
}

impl fmt::Debug for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dec({self})")
    }
}

impl FromStr for Dec {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for Dec {
    fn from(units: u64) -> Self {
        Self::from_int(units)
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
