//! The liquidity pool accounting engine.
//!
//! [`LiquidityPool`] owns the reserves and the [`ShareLedger`] of one
//! pair and settles every mutation against an injected
//! [`TokenLedger`](crate::traits::TokenLedger). [`PoolSnapshot`] is the
//! read-only copy handed to concurrent readers.

mod liquidity_pool;
mod settlement;
mod share_ledger;
mod snapshot;

#[cfg(test)]
mod proptest_properties;

pub use liquidity_pool::LiquidityPool;
pub use share_ledger::ShareLedger;
pub use snapshot::PoolSnapshot;
