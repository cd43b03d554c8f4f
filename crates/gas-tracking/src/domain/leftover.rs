//! # Leftover Reward Merge
//!
//! Rewards are fractional but payouts are integral. A reward address's
//! sub-unit remainder is parked in a `LeftOverRewardEntry` and folded into
//! the next batch of rewards; whole units are released once they reach the
//! configured threshold.
//!
//! ```text
//! stored remainder ─┐
//!                   ├─► union-add ─► per denom: truncate ─► >= threshold? ─► Coin out
//! new rewards ──────┘                                           │
//!                                                               └─► stays in remainder
//! ```
//!
//! This module is pure: the keeper loads and persists the entry around it.

use crate::domain::entities::LeftOverRewardEntry;
use shared_types::{Coin, CoinError, Dec, DecCoin, DecCoins, U256};

/// Outcome of merging new rewards into a stored remainder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeftOverMerge {
    /// Stored remainder plus new rewards, before any release.
    pub merged: DecCoins,
    /// Entry to persist. Always written back, even if nothing was released.
    pub entry: LeftOverRewardEntry,
    /// Whole units released for payout, ascending by denom.
    pub distributed: Vec<Coin>,
}

/// Merge `rewards` into `existing` and release whole units at or above
/// `threshold`.
///
/// At threshold `0` every merged denom crosses, so a denom holding less than
/// one unit is released as a zero-amount coin and keeps its fraction.
///
/// `existing` is `None` for an address that never had an entry. `rewards`
/// may arrive unsorted and may repeat a denom; repeats are summed. Denoms
/// whose merged amount is exactly zero are dropped from the entry.
pub fn merge_left_over(
    existing: Option<LeftOverRewardEntry>,
    rewards: Vec<DecCoin>,
    threshold: u64,
) -> Result<LeftOverMerge, CoinError> {
    let previous = existing.map(|e| e.contract_rewards).unwrap_or_default();
    let incoming = DecCoins::from_unsorted(rewards)?;
    let merged = previous.add(&incoming)?;
    let mut remaining = merged.clone();

    let threshold = U256::from(threshold);
    let mut distributed = Vec::new();

    for coin in remaining.iter_mut() {
        let whole = coin.amount.truncate_int();
        if whole < threshold {
            continue;
        }

        coin.amount = coin.amount.checked_sub(Dec::from_int_u256(whole)?)?;
        distributed.push(Coin::new(coin.denom.clone(), whole));
    }

    Ok(LeftOverMerge {
        merged,
        entry: LeftOverRewardEntry {
            contract_rewards: remaining,
        },
        distributed,
    })
}
