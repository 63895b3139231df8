//! Outcome of a committed swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, PoolId, Reserves, TokenId};

/// What a swap moved, returned once the trade is committed.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`: the fee is the part of the input that did not
///   take part in pricing.
/// - `reserves` is the post-trade state, whose product is not less than
///   the pre-trade product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapResult {
    pool: PoolId,
    token_in: TokenId,
    token_out: TokenId,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    reserves: Reserves,
}

impl SwapResult {
    pub(crate) const fn new(
        pool: PoolId,
        token_in: TokenId,
        token_out: TokenId,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        reserves: Reserves,
    ) -> Self {
        Self {
            pool,
            token_in,
            token_out,
            amount_in,
            amount_out,
            fee,
            reserves,
        }
    }

    /// Pool that executed the trade.
    pub const fn pool(&self) -> PoolId {
        self.pool
    }

    /// Token paid in.
    pub const fn token_in(&self) -> TokenId {
        self.token_in
    }

    /// Token paid out.
    pub const fn token_out(&self) -> TokenId {
        self.token_out
    }

    /// Gross input pulled from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output pushed to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Input retained by the pool as fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Reserves after the trade.
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({}: in={}, out={}, fee={})",
            self.pool, self.amount_in, self.amount_out, self.fee
        )
    }
}
