//! Raw token amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::decimal;

/// A raw token amount in the token's smallest unit (wei or equivalent).
///
/// `Amount` never interprets decimals; a value of `10^18` is "one token"
/// only by the convention of an 18-decimal ledger.  Every `u128` is a
/// valid amount.
///
/// Arithmetic methods are checked and return `None` instead of wrapping
/// or panicking.  Products that may exceed `u128` (reserve products,
/// share ratios) go through [`crate::math::mul_div`] instead.
///
/// # Examples
///
/// ```
/// use lite_dex::domain::Amount;
///
/// let reserve = Amount::new(1_000);
/// assert_eq!(reserve.checked_add(&Amount::new(100)), Some(Amount::new(1_100)));
/// assert_eq!(Amount::ZERO.checked_sub(&reserve), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(#[serde(with = "decimal")] u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn add_and_overflow() {
        assert_eq!(
            Amount::new(100).checked_add(&Amount::new(200)),
            Some(Amount::new(300))
        );
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_and_underflow() {
        assert_eq!(
            Amount::new(300).checked_sub(&Amount::new(100)),
            Some(Amount::new(200))
        );
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn serializes_as_decimal_string() {
        let amount = Amount::new(90_661_089_388_014_913_158);
        let Ok(value) = serde_json::to_value(amount) else {
            panic!("serialize");
        };
        assert_eq!(value, serde_json::json!("90661089388014913158"));
        let Ok(back) = serde_json::from_value::<Amount>(value) else {
            panic!("deserialize");
        };
        assert_eq!(back, amount);
    }

    #[test]
    fn display() {
        assert_eq!(Amount::new(90_661).to_string(), "90661");
    }
}
