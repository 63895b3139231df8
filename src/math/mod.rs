//! Integer arithmetic for the pool: 256-bit widened multiply-then-divide,
//! the integer square root used to size the first share mint, and the
//! constant-product [`QuoteEngine`].
//!
//! Every division rounds in the pool's favour:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output, shares minted, withdrawal payout | [`Rounding::Down`](crate::domain::Rounding::Down) |
//! | Required input (exact-out quote) | [`Rounding::Up`](crate::domain::Rounding::Up) |

mod checked;
mod quote;
mod wide;

pub use checked::CheckedArithmetic;
pub use quote::{Quote, QuoteEngine};
pub use wide::{div_wide, mul_div, product, sqrt_product, U256};
