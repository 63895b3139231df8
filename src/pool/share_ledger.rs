//! LP share balances for a single pool.
//!
//! Mutation is split into a fallible plan and an infallible apply so a
//! pool can validate every effect of an operation before it settles
//! against the token ledger, and commit afterwards without any failure
//! path.

use std::collections::HashMap;

use crate::domain::{AccountId, Shares};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;

/// Holder balances plus total supply.
///
/// # Invariant
///
/// `total == Σ balances`. Zero balances are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: HashMap<AccountId, Shares>,
    total: Shares,
}

/// A validated mint or burn, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) struct ShareChange {
    holder: AccountId,
    balance_after: Shares,
    total_after: Shares,
}

impl ShareChange {
    pub(crate) const fn total_after(&self) -> Shares {
        self.total_after
    }
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total supply.
    #[must_use]
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Balance of `holder`; zero if unknown.
    #[must_use]
    pub fn balance_of(&self, holder: &AccountId) -> Shares {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    /// Number of accounts with a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Validates minting `shares` to `to`.
    pub(crate) fn plan_mint(&self, to: AccountId, shares: Shares) -> Result<ShareChange> {
        Ok(ShareChange {
            holder: to,
            balance_after: self.balance_of(&to).safe_add(&shares)?,
            total_after: self.total.safe_add(&shares)?,
        })
    }

    /// Validates burning `shares` from `from`.
    ///
    /// Zero shares, or more than `from` holds, is
    /// [`DexError::InsufficientBalance`].
    pub(crate) fn plan_burn(&self, from: AccountId, shares: Shares) -> Result<ShareChange> {
        if shares.is_zero() {
            return Err(DexError::InsufficientBalance);
        }
        let balance_after = self
            .balance_of(&from)
            .checked_sub(&shares)
            .ok_or(DexError::InsufficientBalance)?;
        Ok(ShareChange {
            holder: from,
            balance_after,
            total_after: self.total.safe_sub(&shares)?,
        })
    }

    /// Applies a change planned against the current state.
    pub(crate) fn apply(&mut self, change: ShareChange) {
        if change.balance_after.is_zero() {
            self.balances.remove(&change.holder);
        } else {
            self.balances.insert(change.holder, change.balance_after);
        }
        self.total = change.total_after;
    }
}
