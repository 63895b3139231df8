//! Liquidity-provider share units.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::decimal;

/// A quantity of LP shares in one pool.
///
/// Distinct from [`Amount`](super::Amount) because shares measure a
/// fraction of a pool's reserves, not a quantity of any one token.
///
/// # Examples
///
/// ```
/// use lite_dex::domain::Shares;
///
/// let a = Shares::new(1_000);
/// assert_eq!(a.checked_sub(&Shares::new(400)), Some(Shares::new(600)));
/// assert_eq!(a.checked_sub(&Shares::new(1_001)), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Shares(#[serde(with = "decimal")] u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if zero.
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

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
