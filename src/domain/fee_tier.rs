//! Swap fee accounting policy built on [`BasisPoints`].
//!
//! The fee is charged on the input side and never leaves the pool: only
//! the fee-adjusted input takes part in the constant-product pricing,
//! while the full input is added to the reserve.  That retained remainder
//! is what keeps `reserve_a × reserve_b` non-decreasing across swaps, so
//! each LP share is worth marginally more after every trade.
//!
//! # Rounding
//!
//! | Operation | Formula | Direction |
//! |-----------|---------|-----------|
//! | [`FeeTier::apply_to_input`] | `amount × (10 000 − bps) / 10 000` | down |
//! | [`FeeTier::gross_up`] | `net × 10 000 / (10 000 − bps)` | up |

use core::fmt;

use serde::{Deserialize, Serialize};

use super::basis_points::BPS_DENOMINATOR;
use super::{Amount, BasisPoints, Rounding};
use crate::error::{DexError, Result};
use crate::math::mul_div;

/// A pool's swap fee rate.
///
/// # Examples
///
/// ```
/// use lite_dex::domain::{Amount, FeeTier};
///
/// let fee = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(fee.apply_to_input(Amount::new(1_000)).unwrap(), Amount::new(997));
/// assert_eq!(fee.gross_up(Amount::new(997)).unwrap(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05% (5 bp), for correlated pairs.
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% (30 bp), the standard rate.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% (100 bp), for volatile pairs.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a fee tier from arbitrary basis points.
    ///
    /// Validity (strictly below 100%) is checked by
    /// [`PoolConfig::validate`](crate::config::PoolConfig::validate) and by
    /// every fee computation.
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if some input survives the fee (rate below 100%).
    #[must_use]
    pub const fn is_tradeable(&self) -> bool {
        self.0.get() < BPS_DENOMINATOR
    }

    /// Returns the fee-adjusted input `floor(amount × (10 000 − bps) / 10 000)`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if the rate exceeds 100%.
    pub fn apply_to_input(&self, amount: Amount) -> Result<Amount> {
        self.0.complement()?.scale(amount, Rounding::Down)
    }

    /// Returns the smallest gross input whose fee-adjusted value is at
    /// least `net`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidConfiguration`] if the rate is 100% or more.
    /// - [`DexError::ArithmeticOverflow`] if the gross amount exceeds
    ///   `u128`.
    pub fn gross_up(&self, net: Amount) -> Result<Amount> {
        let kept = self.0.complement()?;
        if kept.get() == 0 {
            return Err(DexError::InvalidConfiguration(
                "100 percent fee makes swaps impossible",
            ));
        }
        mul_div(
            net.get(),
            u128::from(BPS_DENOMINATOR),
            u128::from(kept.get()),
            Rounding::Up,
        )
        .map(Amount::new)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
