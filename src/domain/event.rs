//! Events journaled by the registry for external observers.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, PoolId, Reserves, Shares, TokenId};

/// A committed state change.
///
/// Events are only recorded after the corresponding mutation has fully
/// succeeded; a rejected or rolled-back call leaves no event behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DexEvent {
    /// A new pool was registered.
    PairCreated {
        /// Id of the new pool.
        pool: PoolId,
        /// Lower token.
        token_a: TokenId,
        /// Higher token.
        token_b: TokenId,
        /// Ledger account holding the pool's reserves.
        account: AccountId,
        /// Number of pairs after creation.
        pair_count: usize,
    },
    /// Liquidity was deposited.
    SharesMinted {
        /// Pool id.
        pool: PoolId,
        /// Depositor.
        provider: AccountId,
        /// Token A deposited.
        amount_a: Amount,
        /// Token B deposited.
        amount_b: Amount,
        /// Shares minted.
        shares: Shares,
    },
    /// Liquidity was withdrawn.
    SharesBurned {
        /// Pool id.
        pool: PoolId,
        /// Withdrawer.
        provider: AccountId,
        /// Token A paid out.
        amount_a: Amount,
        /// Token B paid out.
        amount_b: Amount,
        /// Shares burned.
        shares: Shares,
    },
    /// A trade was executed.
    Swapped {
        /// Pool id.
        pool: PoolId,
        /// Trader.
        trader: AccountId,
        /// Token paid in.
        token_in: TokenId,
        /// Gross input.
        amount_in: Amount,
        /// Output paid.
        amount_out: Amount,
        /// Reserves after the trade.
        reserves: Reserves,
    },
}

impl DexEvent {
    /// Pool the event refers to.
    #[must_use]
    pub const fn pool(&self) -> PoolId {
        match self {
            Self::PairCreated { pool, .. }
            | Self::SharesMinted { pool, .. }
            | Self::SharesBurned { pool, .. }
            | Self::Swapped { pool, .. } => *pool,
        }
    }
}
