//! # Coins
//!
//! Integral (`Coin`) and decimal (`DecCoin`) amounts tagged with a
//! denomination, plus `DecCoins`, a denom-sorted set of decimal amounts.
//!
//! `DecCoins` keeps its entries sorted by denom at all times. Ledger state is
//! replicated, so iteration order has to be identical on every node.

use crate::decimal::Dec;
use crate::errors::CoinError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Minimum denom length.
pub const MIN_DENOM_LEN: usize = 3;

/// Maximum denom length.
pub const MAX_DENOM_LEN: usize = 128;

/// Validate a denomination: a letter followed by letters, digits or `/:._-`.
pub fn validate_denom(denom: &str) -> Result<(), CoinError> {
    let len_ok = (MIN_DENOM_LEN..=MAX_DENOM_LEN).contains(&denom.len());
    let mut chars = denom.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));

    if len_ok && first_ok && rest_ok {
        Ok(())
    } else {
        Err(CoinError::InvalidDenom(denom.to_string()))
    }
}

// =============================================================================
// COIN (integral)
// =============================================================================

/// An integral amount of a single denomination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination.
    pub denom: String,
    /// Whole-unit amount.
    pub amount: U256,
}

impl Coin {
    /// Create a new coin.
    pub fn new(denom: impl Into<String>, amount: impl Into<U256>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// =============================================================================
// DEC COIN (fractional)
// =============================================================================

/// A decimal amount of a single denomination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecCoin {
    /// Denomination.
    pub denom: String,
    /// Decimal amount.
    pub amount: Dec,
}

impl DecCoin {
    /// Create a new decimal coin.
    pub fn new(denom: impl Into<String>, amount: Dec) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Parse the amount from a decimal literal.
    pub fn parse(denom: impl Into<String>, amount: &str) -> Result<Self, CoinError> {
        Ok(Self::new(denom, Dec::parse(amount)?))
    }

    /// Validate the denomination.
    pub fn validate(&self) -> Result<(), CoinError> {
        validate_denom(&self.denom)
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// =============================================================================
// DEC COINS (sorted set)
// =============================================================================

/// Denom-sorted set of decimal amounts with at most one entry per denom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecCoins(Vec<DecCoin>);

impl DecCoins {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary input: validates denoms, sorts by denom, sums
    /// duplicate denoms and drops zero amounts.
    pub fn from_unsorted(coins: Vec<DecCoin>) -> Result<Self, CoinError> {
        for coin in &coins {
            coin.validate()?;
        }

        let mut coins = coins;
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));

        let mut folded: Vec<DecCoin> = Vec::with_capacity(coins.len());
        for coin in coins {
            match folded.last_mut() {
                Some(last) if last.denom == coin.denom => {
                    last.amount = last.amount.checked_add(coin.amount)?;
                }
                _ => folded.push(coin),
            }
        }
        folded.retain(|c| !c.amount.is_zero());

        Ok(Self(folded))
    }

    /// Sorted union of two sets. Common denoms are summed, zero results dropped.
    pub fn add(&self, other: &DecCoins) -> Result<DecCoins, CoinError> {
        let (a, b) = (&self.0, &other.0);
        let mut merged = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() || j < b.len() {
            let order = match (a.get(i), b.get(j)) {
                (Some(x), Some(y)) => x.denom.cmp(&y.denom),
                (Some(_), None) => Ordering::Less,
                _ => Ordering::Greater,
            };

            let coin = match order {
                Ordering::Less => {
                    i += 1;
                    a[i - 1].clone()
                }
                Ordering::Greater => {
                    j += 1;
                    b[j - 1].clone()
                }
                Ordering::Equal => {
                    let amount = a[i].amount.checked_add(b[j].amount)?;
                    let coin = DecCoin::new(a[i].denom.clone(), amount);
                    i += 1;
                    j += 1;
                    coin
                }
            };

            if !coin.amount.is_zero() {
                merged.push(coin);
            }
        }

        Ok(Self(merged))
    }

    /// Amount held for `denom`, zero if absent.
    #[must_use]
    pub fn amount_of(&self, denom: &str) -> Dec {
        self.0
            .binary_search_by(|c| c.denom.as_str().cmp(denom))
            .map(|i| self.0[i].amount)
            .unwrap_or_default()
    }

    /// Number of denoms held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no denom is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in denom order.
    pub fn iter(&self) -> std::slice::Iter<'_, DecCoin> {
        self.0.iter()
    }

    /// Mutable iteration in denom order. Callers may change amounts, not denoms.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, DecCoin> {
        self.0.iter_mut()
    }

    /// Borrow the entries.
    #[must_use]
    pub fn as_slice(&self) -> &[DecCoin] {
        &self.0
    }

    /// Take ownership of the entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<DecCoin> {
        self.0
    }
}

impl<'a> IntoIterator for &'a DecCoins {
    type Item = &'a DecCoin;
    type IntoIter = std::slice::Iter<'a, DecCoin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DecCoins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
