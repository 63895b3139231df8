//! Declarative, validated configuration.
//!
//! [`DexConfig`] is the top-level blueprint handed to
//! [`PairRegistry::new`](crate::registry::PairRegistry::new); its
//! [`PoolConfig`] is stamped onto every pool the registry creates.

mod dex_config;
mod pool_config;

pub use dex_config::DexConfig;
pub use pool_config::PoolConfig;
