//! Read-only pricing surface of a pool.

use crate::domain::{Amount, FeeTier, PairKey, PoolId, PoolPhase, Reserves, TokenId};
use crate::error::{DexError, Result};
use crate::math::{Quote, QuoteEngine};

/// State a quote depends on, plus quoting built on top of it.
///
/// Implemented by [`LiquidityPool`](crate::pool::LiquidityPool) and by
/// [`PoolSnapshot`](crate::pool::PoolSnapshot), so a quote taken from a
/// published snapshot and one taken from the live pool agree whenever
/// the reserves do.
pub trait PoolView {
    /// Registry id.
    fn pool_id(&self) -> PoolId;

    /// The pool's canonical token pair.
    fn pair(&self) -> &PairKey;

    /// Swap fee rate.
    fn fee_tier(&self) -> FeeTier;

    /// Current reserves.
    fn reserves(&self) -> Reserves;

    /// Lifecycle phase.
    fn phase(&self) -> PoolPhase;

    /// Returns the current reserves.
    fn get_reserves(&self) -> Reserves {
        self.reserves()
    }

    /// Prices selling `amount_in` of `token_in`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`DexError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`DexError::InsufficientLiquidity`] if the pool is empty.
    fn quote_exact_in(&self, token_in: TokenId, amount_in: Amount) -> Result<Quote> {
        let side_in = self.pair().side_of(&token_in)?;
        if amount_in.is_zero() {
            return Err(DexError::InsufficientInputAmount);
        }
        let (reserve_in, reserve_out) = self.reserves().oriented(side_in);
        QuoteEngine::exact_in(amount_in, reserve_in, reserve_out, self.fee_tier())
    }

    /// Output for selling `amount_in` of `token_in` at current reserves.
    ///
    /// # Errors
    ///
    /// Same as [`quote_exact_in`](Self::quote_exact_in).
    fn get_amount_out(&self, token_in: TokenId, amount_in: Amount) -> Result<Amount> {
        self.quote_exact_in(token_in, amount_in).map(|q| q.amount_out)
    }

    /// Smallest input of `token_in` that buys at least `amount_out` of the
    /// other token.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_in` is not in the pair.
    /// - See [`QuoteEngine::exact_out`] for the rest.
    fn get_amount_in(&self, token_in: TokenId, amount_out: Amount) -> Result<Amount> {
        let side_in = self.pair().side_of(&token_in)?;
        let (reserve_in, reserve_out) = self.reserves().oriented(side_in);
        QuoteEngine::amount_in(amount_out, reserve_in, reserve_out, self.fee_tier())
    }
}
