//! Basis-point representation for fee rates.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{DexError, Result};
use crate::math::mul_div;

/// Denominator of every basis-point ratio (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%).
///
/// Values above 10 000 are representable but are not valid percentages;
/// [`complement`](Self::complement) rejects them.
///
/// # Examples
///
/// ```
/// use lite_dex::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.complement().unwrap(), BasisPoints::new(9_970));
/// assert_eq!(bp.scale(Amount::new(1_000_000), Rounding::Down).unwrap(), Amount::new(3_000));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `10_000 - self`, the share of an amount that is kept.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if `self` exceeds 100%.
    pub const fn complement(&self) -> Result<Self> {
        match BPS_DENOMINATOR.checked_sub(self.0) {
            Some(v) => Ok(Self(v)),
            None => Err(DexError::InvalidConfiguration(
                "basis points exceed 100 percent",
            )),
        }
    }

    /// Computes `amount * self / 10_000` with a 256-bit intermediate and
    /// the given rounding direction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ArithmeticOverflow`] only if the result does not
    /// fit in an [`Amount`], which requires `self` above 100%.
    pub fn scale(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(
            amount.get(),
            u128::from(self.0),
            u128::from(BPS_DENOMINATOR),
            rounding,
        )
        .map(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn complement_of_standard_fee() {
        let Ok(kept) = BasisPoints::new(30).complement() else {
            panic!("expected Ok");
        };
        assert_eq!(kept, BasisPoints::new(9_970));
    }

    #[test]
    fn complement_rejects_over_one_hundred_percent() {
        assert!(BasisPoints::new(10_001).complement().is_err());
    }

    #[test]
    fn scale_rounds_in_requested_direction() {
        // 30bp of 1 = 0.003
        let bp = BasisPoints::new(30);
        let Ok(down) = bp.scale(Amount::new(1), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = bp.scale(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::ZERO);
        assert_eq!(up, Amount::new(1));
    }

    #[test]
    fn scale_handles_amounts_near_u128_max() {
        // amount * 9_970 would overflow u128; the wide intermediate does not.
        let Ok(scaled) = BasisPoints::new(9_970).scale(Amount::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert!(scaled < Amount::MAX);
        assert!(scaled > Amount::new(u128::MAX / 10_000 * 9_969));
    }

    #[test]
    fn scale_overflows_above_one_hundred_percent() {
        let result = BasisPoints::new(20_000).scale(Amount::MAX, Rounding::Down);
        assert!(matches!(result, Err(DexError::ArithmeticOverflow(_))));
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(30).to_string(), "30bp");
    }
}
