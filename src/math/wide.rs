//! 256-bit intermediates for products of two `u128` values.
//!
//! Reserve products, share ratios and fee scaling all multiply two
//! `u128` quantities before dividing. With 18-decimal tokens a pool of a
//! few thousand units on each side already exceeds `u128` in the product,
//! so every such computation widens to [`U256`], divides, and only then
//! narrows back with an explicit overflow check.

use crate::domain::Rounding;
use crate::error::{DexError, Result};

// The macro expands to code naming the two-parameter `Result`; keep it
// clear of the crate alias.
mod u256 {
    #![allow(missing_docs, clippy::all)]

    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer for intermediate products.
        pub struct U256(4);
    }
}

pub use u256::U256;

/// Exact product `a × b`. Never overflows: `(2^128 − 1)^2 < 2^256`.
#[must_use]
pub fn product(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Computes `a × b / denominator` with a 256-bit intermediate.
///
/// # Errors
///
/// - [`DexError::DivisionByZero`] if `denominator` is zero.
/// - [`DexError::ArithmeticOverflow`] if the quotient exceeds `u128`.
///
/// # Examples
///
/// ```
/// use lite_dex::domain::Rounding;
/// use lite_dex::math::mul_div;
///
/// // u128::MAX * 2 would overflow a u128 multiply.
/// assert_eq!(mul_div(u128::MAX, 2, 4, Rounding::Down), Ok(u128::MAX / 2));
/// assert_eq!(mul_div(7, 1, 2, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    if denominator == 0 {
        return Err(DexError::DivisionByZero);
    }
    div_wide(product(a, b), U256::from(denominator), rounding)
}

/// Divides two 256-bit values and narrows the quotient to `u128`.
///
/// # Errors
///
/// Same as [`mul_div`].
pub fn div_wide(numerator: U256, denominator: U256, rounding: Rounding) -> Result<u128> {
    if denominator.is_zero() {
        return Err(DexError::DivisionByZero);
    }
    let (quotient, remainder) = numerator.div_mod(denominator);
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        // no overflow: a non-zero remainder implies denominator > 1
        quotient + U256::one()
    } else {
        quotient
    };
    narrow(quotient)
}

/// `floor(sqrt(a × b))`, the geometric mean of two amounts.
///
/// Always fits in `u128` since the product is below `2^256`.
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    product(a, b).integer_sqrt().low_u128()
}

fn narrow(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(DexError::ArithmeticOverflow("256-bit quotient exceeds u128"));
    }
    Ok(value.low_u128())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn product_of_ethereum_scale_reserves() {
        // 1000e18 squared is ~1e42, far beyond u128::MAX (~3.4e38).
        let k = product(1_000 * E18, 1_000 * E18);
        assert!(k > U256::from(u128::MAX));
        assert_eq!(k / U256::from(E18), U256::from(1_000_000 * E18));
    }

    #[test]
    fn u256_parses_decimal_beyond_u128() {
        let Ok(k) = U256::from_dec_str("1000000000000000000000000000000000000000000") else {
            panic!("valid decimal");
        };
        assert_eq!(k, product(1_000 * E18, 1_000 * E18));
    }

    #[test]
    fn mul_div_rounding() {
        assert_eq!(mul_div(10, 1, 3, Rounding::Down), Ok(3));
        assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
        assert_eq!(mul_div(9, 1, 3, Rounding::Up), Ok(3));
    }

    #[test]
    fn mul_div_zero_denominator() {
        assert_eq!(mul_div(1, 1, 0, Rounding::Down), Err(DexError::DivisionByZero));
        assert_eq!(
            div_wide(U256::one(), U256::zero(), Rounding::Up),
            Err(DexError::DivisionByZero)
        );
    }

    #[test]
    fn mul_div_overflowing_quotient() {
        let Err(e) = mul_div(u128::MAX, u128::MAX, 1, Rounding::Down) else {
            panic!("expected overflow");
        };
        assert!(matches!(e, DexError::ArithmeticOverflow(_)));
    }

    #[test]
    fn mul_div_max_quotient_fits() {
        assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX, Rounding::Up), Ok(u128::MAX));
    }

    #[test]
    fn sqrt_product_values() {
        assert_eq!(sqrt_product(0, 5), 0);
        assert_eq!(sqrt_product(1, 1), 1);
        assert_eq!(sqrt_product(2, 8), 4);
        assert_eq!(sqrt_product(3, 5), 3); // sqrt(15) = 3.87
        assert_eq!(sqrt_product(100 * E18, 200 * E18), 141_421_356_237_309_504_880);
        assert_eq!(sqrt_product(u128::MAX, u128::MAX), u128::MAX);
    }
}
