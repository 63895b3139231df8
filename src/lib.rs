//! # Lite DEX
//!
//! A minimal constant-product decentralized exchange: a registry of
//! token-pair pools, each holding two reserves, issuing liquidity shares
//! and pricing swaps on the `x · y = k` curve with a 0.30% input fee.
//!
//! Tokens live outside the pools, behind the [`TokenLedger`](traits::TokenLedger)
//! trait. Pools pull deposits and swap inputs through allowances granted
//! to their pool account and push withdrawals and swap outputs back.
//! [`InMemoryLedger`](ledger::InMemoryLedger) is the bundled
//! implementation.
//!
//! # Quick Start
//!
//! ```rust
//! use lite_dex::prelude::*;
//!
//! let (usdc, weth) = (TokenId::from_label("USDC"), TokenId::from_label("WETH"));
//! let alice = AccountId::from_label("alice");
//!
//! // 1. A registry over an in-memory ledger
//! let mut dex = PairRegistry::new(DexConfig::default(), InMemoryLedger::new())
//!     .expect("default config is valid");
//!
//! // 2. Create the pair; lookup works in either order
//! let pool = dex.create_pair(usdc, weth).expect("new pair");
//! assert_eq!(dex.get_pair(weth, usdc), Some(pool));
//!
//! // 3. Fund alice and let the pool pull from her
//! let account = dex.pool(pool).expect("registered").account();
//! for token in [usdc, weth] {
//!     dex.ledger_mut().mint(token, alice, Amount::new(1_000_000)).expect("mint");
//!     dex.ledger_mut().approve(token, alice, account, Amount::MAX).expect("approve");
//! }
//!
//! // 4. Seed liquidity and trade against it
//! let receipt = dex
//!     .add_liquidity(pool, alice, Amount::new(100_000), Amount::new(200_000))
//!     .expect("seeded");
//! assert!(!receipt.shares.is_zero());
//!
//! let quote = dex.get_amount_out(pool, usdc, Amount::new(1_000)).expect("quote");
//! let result = dex.swap(pool, alice, usdc, Amount::new(1_000), quote).expect("swap");
//! assert_eq!(result.amount_out(), quote);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │ SharedRegistry │  one writer, readers clone published snapshots
//! └───────┬────────┘
//!         ▼
//! ┌────────────────┐
//! │  PairRegistry  │  PairKey -> PoolId, owns the TokenLedger, event journal
//! └───────┬────────┘
//!         ▼
//! ┌────────────────┐
//! │ LiquidityPool  │  reserves, ShareLedger, phase; check -> settle -> commit
//! └───────┬────────┘
//!         ▼
//! ┌────────────────┐
//! │  QuoteEngine   │  256-bit constant-product pricing
//! └────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`TokenId`](domain::TokenId), [`PairKey`](domain::PairKey), [`FeeTier`](domain::FeeTier), etc. |
//! | [`traits`] | [`TokenLedger`](traits::TokenLedger) and the read-only [`PoolView`](traits::PoolView) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`math`] | Checked and 256-bit arithmetic, [`QuoteEngine`](math::QuoteEngine) |
//! | [`pool`] | [`LiquidityPool`](pool::LiquidityPool), [`ShareLedger`](pool::ShareLedger), [`PoolSnapshot`](pool::PoolSnapshot) |
//! | [`registry`] | [`PairRegistry`](registry::PairRegistry) |
//! | [`sync`] | [`SharedRegistry`](sync::SharedRegistry) for multi-threaded use |
//! | [`config`] | [`DexConfig`](config::DexConfig) and [`PoolConfig`](config::PoolConfig), loadable from TOML |
//! | [`error`] | [`DexError`](error::DexError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod sync;
pub mod traits;
