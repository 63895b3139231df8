//! Value types of the exchange domain.
//!
//! Identifiers ([`TokenId`], [`AccountId`], [`PoolId`], [`PairKey`]),
//! quantities ([`Amount`], [`Shares`], [`Reserves`]), the fee policy
//! ([`BasisPoints`], [`FeeTier`]) and the records a mutation returns or
//! journals ([`SwapResult`], [`LiquidityReceipt`], [`DexEvent`]).
//! Quantities are newtypes with checked arithmetic; nothing here wraps or
//! panics.

mod account_id;
mod amount;
mod basis_points;
mod decimal;
mod event;
mod fee_tier;
mod hex32;
mod pair_key;
mod phase;
mod pool_id;
mod receipt;
mod reserves;
mod rounding;
mod shares;
mod swap_result;
mod token_id;

pub use account_id::AccountId;
pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use event::DexEvent;
pub use fee_tier::FeeTier;
pub use pair_key::{PairKey, Side};
pub use phase::PoolPhase;
pub use pool_id::PoolId;
pub use receipt::{LiquidityAction, LiquidityReceipt};
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_result::SwapResult;
pub use token_id::TokenId;
