//! Constant-product swap pricing.
//!
//! # Formulas
//!
//! Exact input, with `net = floor(amount_in × (10 000 − fee) / 10 000)`:
//!
//! ```text
//! amount_out = floor(reserve_out × net / (reserve_in + net))
//! ```
//!
//! Exact output, the inverse:
//!
//! ```text
//! net       = ceil(reserve_in × amount_out / (reserve_out − amount_out))
//! amount_in = ceil(net × 10 000 / (10 000 − fee))
//! ```
//!
//! Both directions round in the pool's favour, and every product is
//! computed in 256 bits.

use serde::{Deserialize, Serialize};

use super::{div_wide, product, U256};
use crate::domain::{Amount, FeeTier, Rounding};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;

/// A priced trade against a reserve snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Gross input paid by the trader.
    pub amount_in: Amount,
    /// Output the trader receives.
    pub amount_out: Amount,
    /// Part of `amount_in` retained by the pool without pricing.
    pub fee: Amount,
}

/// Stateless pricing functions over a `(reserve_in, reserve_out)` pair.
///
/// Used by [`LiquidityPool::swap`](crate::pool::LiquidityPool::swap) to
/// price a trade and by read-only quote queries, so a quote taken
/// against unchanged reserves equals what a swap would realise.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteEngine;

impl QuoteEngine {
    /// Prices an exact-input trade.
    ///
    /// The output may be zero for dust inputs; rejecting that is the
    /// caller's decision.
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`DexError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`DexError::InvalidConfiguration`] if `fee` exceeds 100%.
    pub fn exact_in(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        fee: FeeTier,
    ) -> Result<Quote> {
        if amount_in.is_zero() {
            return Err(DexError::InsufficientInputAmount);
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(DexError::InsufficientLiquidity);
        }

        let net = fee.apply_to_input(amount_in)?;
        let numerator = product(reserve_out.get(), net.get());
        let denominator = U256::from(reserve_in.get()) + U256::from(net.get());
        let amount_out = Amount::new(div_wide(numerator, denominator, Rounding::Down)?);

        Ok(Quote {
            amount_in,
            amount_out,
            fee: amount_in.safe_sub(&net)?,
        })
    }

    /// Output for `amount_in`; see [`exact_in`](Self::exact_in).
    ///
    /// # Errors
    ///
    /// Same as [`exact_in`](Self::exact_in).
    pub fn amount_out(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        fee: FeeTier,
    ) -> Result<Amount> {
        Self::exact_in(amount_in, reserve_in, reserve_out, fee).map(|q| q.amount_out)
    }

    /// Prices an exact-output trade: the smallest gross input whose
    /// exact-input quote is at least `amount_out`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientOutputAmount`] if `amount_out` is zero.
    /// - [`DexError::InsufficientLiquidity`] if a reserve is zero or
    ///   `amount_out` would drain the output reserve.
    /// - [`DexError::ArithmeticOverflow`] if the required input exceeds
    ///   `u128`.
    pub fn exact_out(
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        fee: FeeTier,
    ) -> Result<Quote> {
        if amount_out.is_zero() {
            return Err(DexError::InsufficientOutputAmount {
                quoted: Amount::ZERO,
                minimum: Amount::ZERO,
            });
        }
        if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
            return Err(DexError::InsufficientLiquidity);
        }

        let remaining = reserve_out.safe_sub(&amount_out)?;
        let net = div_wide(
            product(reserve_in.get(), amount_out.get()),
            U256::from(remaining.get()),
            Rounding::Up,
        )?;
        let amount_in = fee.gross_up(Amount::new(net))?;

        Ok(Quote {
            amount_in,
            amount_out,
            fee: amount_in.safe_sub(&Amount::new(net))?,
        })
    }

    /// Input required for `amount_out`; see [`exact_out`](Self::exact_out).
    ///
    /// # Errors
    ///
    /// Same as [`exact_out`](Self::exact_out).
    pub fn amount_in(
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        fee: FeeTier,
    ) -> Result<Amount> {
        Self::exact_out(amount_out, reserve_in, reserve_out, fee).map(|q| q.amount_in)
    }
}
