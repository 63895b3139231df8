//! Immutable view of a pool published for concurrent readers.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, FeeTier, PairKey, PoolId, PoolPhase, Reserves, Shares};
use crate::traits::PoolView;

/// Point-in-time copy of a pool's pricing state.
///
/// Quoting through [`PoolView`] on a snapshot gives the same answer the
/// live pool would have given at the moment the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    id: PoolId,
    pair: PairKey,
    account: AccountId,
    fee_tier: FeeTier,
    reserves: Reserves,
    total_shares: Shares,
    phase: PoolPhase,
}

impl PoolSnapshot {
    pub(crate) const fn new(
        id: PoolId,
        pair: PairKey,
        account: AccountId,
        fee_tier: FeeTier,
        reserves: Reserves,
        total_shares: Shares,
        phase: PoolPhase,
    ) -> Self {
        Self {
            id,
            pair,
            account,
            fee_tier,
            reserves,
            total_shares,
            phase,
        }
    }

    /// Ledger account holding the reserves.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Outstanding LP shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }
}

impl PoolView for PoolSnapshot {
    fn pool_id(&self) -> PoolId {
        self.id
    }

    fn pair(&self) -> &PairKey {
        &self.pair
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    fn reserves(&self) -> Reserves {
        self.reserves
    }

    fn phase(&self) -> PoolPhase {
        self.phase
    }
}
