//! Checked arithmetic trait for quantity newtypes.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods of
//! [`Amount`] and [`Shares`] into [`Result`](crate::error::Result) so that
//! pool code can use `?`.
//!
//! ```
//! use lite_dex::domain::Amount;
//! use lite_dex::math::CheckedArithmetic;
//!
//! assert!(Amount::MAX.safe_add(&Amount::new(1)).is_err());
//! assert_eq!(Amount::new(3).safe_sub(&Amount::new(1)), Ok(Amount::new(2)));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::{DexError, Result};

/// Fallible arithmetic for domain wrapper types.
///
/// No method panics or saturates; every failure is a
/// [`DexError::ArithmeticOverflow`] naming the operation.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// [`DexError::ArithmeticOverflow`] if the sum exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// [`DexError::ArithmeticOverflow`] if the difference is negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(DexError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(DexError::ArithmeticOverflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(DexError::ArithmeticOverflow("share supply overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(DexError::ArithmeticOverflow("share supply underflow"))
    }
}
