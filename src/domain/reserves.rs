//! Pool reserve pair.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Side};
use crate::math::U256;

/// The two token balances a pool prices against, in pair order.
///
/// Both sides are zero exactly when the pool has no outstanding shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reserves {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl Reserves {
    /// Both sides zero.
    pub const EMPTY: Self = Self::new(Amount::ZERO, Amount::ZERO);

    /// Creates a reserve pair.
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Reserve of the lower token.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of the higher token.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Reserve on `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Returns `(reserve_in, reserve_out)` for a trade entering on `side_in`.
    #[must_use]
    pub const fn oriented(&self, side_in: Side) -> (Amount, Amount) {
        (self.get(side_in), self.get(side_in.flip()))
    }

    /// Returns a copy with `side` replaced.
    pub const fn with(self, side: Side, value: Amount) -> Self {
        match side {
            Side::A => Self::new(value, self.reserve_b),
            Side::B => Self::new(self.reserve_a, value),
        }
    }

    /// `true` if either side is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() || self.reserve_b.is_zero()
    }

    /// The invariant `k = reserve_a × reserve_b`, exact in 256 bits.
    #[must_use]
    pub fn product(&self) -> U256 {
        crate::math::product(self.reserve_a.get(), self.reserve_b.get())
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.reserve_a, self.reserve_b)
    }
}
