//! Convenience re-exports for common types and traits.
//!
//! The crate's `Result` alias is left out so a glob import does not
//! shadow `std::result::Result`:
//!
//! ```rust
//! use lite_dex::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dex = PairRegistry::new(DexConfig::default(), InMemoryLedger::new())?;
//!     assert_eq!(dex.pair_count(), 0);
//!     Ok(())
//! }
//! ```

pub use crate::config::{DexConfig, PoolConfig};
pub use crate::domain::{
    AccountId, Amount, BasisPoints, DexEvent, FeeTier, LiquidityReceipt, PairKey, PoolId,
    PoolPhase, Reserves, Shares, SwapResult, TokenId,
};
pub use crate::error::DexError;
pub use crate::ledger::InMemoryLedger;
pub use crate::math::QuoteEngine;
pub use crate::pool::{LiquidityPool, PoolSnapshot};
pub use crate::registry::PairRegistry;
pub use crate::sync::SharedRegistry;
pub use crate::traits::{PoolView, TokenLedger};
