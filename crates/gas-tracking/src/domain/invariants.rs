//! # Domain Invariants
//!
//! Properties every leftover merge must satisfy:
//!
//! - Conservation: per denom, `distributed + remaining == merged`, exactly.
//! - Integral distribution: every released coin is a whole amount at or above
//!   the threshold, and coins come out in strictly ascending denom order.
//!   Zero-amount coins only appear at threshold `0`.
//! - Sub-unit remainder: a denom that released coins keeps less than one unit.
//!
//! The keeper checks these in debug builds; tests check them everywhere.

use crate::domain::leftover::LeftOverMerge;
use shared_types::{Coin, Dec, DecCoins, U256};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Per denom, released whole units plus the stored remainder equal the merged
/// amount.
#[must_use]
pub fn check_conservation_invariant(
    merged: &DecCoins,
    distributed: &[Coin],
    remaining: &DecCoins,
) -> bool {
    let released = |denom: &str| -> U256 {
        distributed
            .iter()
            .filter(|c| c.denom == denom)
            .fold(U256::zero(), |acc, c| acc.saturating_add(c.amount))
    };

    // No denom may appear out of nowhere.
    let known = |denom: &str| merged.iter().any(|c| c.denom == denom);
    if !distributed.iter().all(|c| known(&c.denom)) || !remaining.iter().all(|c| known(&c.denom))
    {
        return false;
    }

    merged.iter().all(|coin| {
        let Ok(whole) = Dec::from_int_u256(released(&coin.denom)) else {
            return false;
        };
        match whole.checked_add(remaining.amount_of(&coin.denom)) {
            Ok(total) => total == coin.amount,
            Err(_) => false,
        }
    })
}

/// Every coin is at least `threshold` and denoms strictly ascend.
#[must_use]
pub fn check_distribution_integral(coins: &[Coin], threshold: u64) -> bool {
    let threshold = U256::from(threshold);
    let amounts_ok = coins.iter().all(|c| c.amount >= threshold);
    let order_ok = coins.windows(2).all(|w| w[0].denom < w[1].denom);
    amounts_ok && order_ok
}

/// Denoms that released coins keep a remainder strictly below one unit.
#[must_use]
pub fn check_remainder_below_unit(remaining: &DecCoins, distributed: &[Coin]) -> bool {
    distributed
        .iter()
        .all(|c| remaining.amount_of(&c.denom) < Dec::one())
}

/// Check all invariants of a merge result.
#[must_use]
pub fn check_all_invariants(merge: &LeftOverMerge, threshold: u64) -> InvariantCheckResult {
    let remaining = &merge.entry.contract_rewards;
    let mut violations = Vec::new();

    if !check_conservation_invariant(&merge.merged, &merge.distributed, remaining) {
        violations.push(InvariantViolation::RemainderNotConserved);
    }

    if !check_distribution_integral(&merge.distributed, threshold) {
        violations.push(InvariantViolation::DistributionNotIntegral { threshold });
    }

    if !check_remainder_below_unit(remaining, &merge.distributed) {
        violations.push(InvariantViolation::RemainderAboveUnit);
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Released plus remaining does not add up to the merged amount.
    RemainderNotConserved,
    /// A released coin is below threshold or out of order.
    DistributionNotIntegral { threshold: u64 },
    /// A released denom still holds a whole unit.
    RemainderAboveUnit,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RemainderNotConserved => write!(f, "leftover remainder not conserved"),
            Self::DistributionNotIntegral { threshold } => {
                write!(f, "distribution not integral at threshold {threshold}")
            }
            Self::RemainderAboveUnit => {
                write!(f, "distributed denom kept a whole unit in its remainder")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
