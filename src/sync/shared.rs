//! Single-writer, many-reader registry handle.
//!
//! Writers serialize on a mutex around the registry, which keeps the
//! one-writer ordering every pool mutation relies on. After each
//! committed mutation the writer publishes a fresh [`PoolSnapshot`] for
//! the affected pool. Readers only take a short read lock to clone an
//! `Arc` out of the published table, so a quote never waits for a swap
//! that is still settling.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::domain::{
    AccountId, Amount, DexEvent, LiquidityReceipt, PairKey, PoolId, Reserves, Shares, SwapResult,
    TokenId,
};
use crate::error::{DexError, Result};
use crate::pool::PoolSnapshot;
use crate::registry::PairRegistry;
use crate::traits::{PoolView, TokenLedger};

#[derive(Debug, Default)]
struct Published {
    index: HashMap<PairKey, PoolId>,
    snapshots: Vec<Arc<PoolSnapshot>>,
}

/// Shareable handle over a [`PairRegistry`].
///
/// `SharedRegistry<L>` is `Send + Sync` whenever `L: Send`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use lite_dex::config::DexConfig;
/// use lite_dex::domain::TokenId;
/// use lite_dex::ledger::InMemoryLedger;
/// use lite_dex::registry::PairRegistry;
/// use lite_dex::sync::SharedRegistry;
///
/// let registry = PairRegistry::new(DexConfig::default(), InMemoryLedger::new()).unwrap();
/// let shared = Arc::new(SharedRegistry::new(registry));
/// let id = shared.create_pair(TokenId::from_label("A"), TokenId::from_label("B")).unwrap();
///
/// let reader = Arc::clone(&shared);
/// std::thread::spawn(move || reader.get_reserves(id).unwrap())
///     .join()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct SharedRegistry<L> {
    writer: Mutex<PairRegistry<L>>,
    published: RwLock<Published>,
}

impl<L: TokenLedger> SharedRegistry<L> {
    /// Wraps `registry` and publishes snapshots of its existing pools.
    pub fn new(registry: PairRegistry<L>) -> Self {
        let mut published = Published::default();
        for (id, pair) in registry.all_pairs() {
            published.index.insert(pair, id);
        }
        published.snapshots = registry
            .all_pairs()
            .filter_map(|(id, _)| registry.snapshot(id).ok())
            .map(Arc::new)
            .collect();
        Self {
            writer: Mutex::new(registry),
            published: RwLock::new(published),
        }
    }

    /// See [`PairRegistry::create_pair`].
    ///
    /// # Errors
    ///
    /// Same as [`PairRegistry::create_pair`].
    pub fn create_pair(&self, x: TokenId, y: TokenId) -> Result<PoolId> {
        let mut registry = self.writer.lock();
        let id = registry.create_pair(x, y)?;
        let snapshot = registry.snapshot(id)?;
        let mut published = self.published.write();
        published.index.insert(*snapshot.pair(), id);
        published.snapshots.push(Arc::new(snapshot));
        Ok(id)
    }

    /// See [`PairRegistry::add_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`PairRegistry::add_liquidity`].
    pub fn add_liquidity(
        &self,
        pool: PoolId,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityReceipt> {
        self.mutate(pool, |registry| {
            registry.add_liquidity(pool, provider, amount_a, amount_b)
        })
    }

    /// See [`PairRegistry::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`PairRegistry::remove_liquidity`].
    pub fn remove_liquidity(
        &self,
        pool: PoolId,
        provider: AccountId,
        shares: Shares,
    ) -> Result<LiquidityReceipt> {
        self.mutate(pool, |registry| {
            registry.remove_liquidity(pool, provider, shares)
        })
    }

    /// See [`PairRegistry::swap`].
    ///
    /// # Errors
    ///
    /// Same as [`PairRegistry::swap`].
    pub fn swap(
        &self,
        pool: PoolId,
        trader: AccountId,
        token_in: TokenId,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult> {
        self.mutate(pool, |registry| {
            registry.swap(pool, trader, token_in, amount_in, min_amount_out)
        })
    }

    /// Runs `f` on the ledger under the writer lock.
    pub fn with_ledger<T>(&self, f: impl FnOnce(&L) -> T) -> T {
        f(self.writer.lock().ledger())
    }

    /// Runs `f` on the mutable ledger under the writer lock.
    pub fn with_ledger_mut<T>(&self, f: impl FnOnce(&mut L) -> T) -> T {
        f(self.writer.lock().ledger_mut())
    }

    /// Drains the registry's event journal.
    pub fn take_events(&self) -> Vec<DexEvent> {
        self.writer.lock().take_events()
    }

    /// Unwraps the registry.
    pub fn into_inner(self) -> PairRegistry<L> {
        self.writer.into_inner()
    }

    fn mutate<T>(
        &self,
        pool: PoolId,
        f: impl FnOnce(&mut PairRegistry<L>) -> Result<T>,
    ) -> Result<T> {
        let mut registry = self.writer.lock();
        let out = f(&mut registry)?;
        let snapshot = Arc::new(registry.snapshot(pool)?);
        if let Some(slot) = self.published.write().snapshots.get_mut(pool.index()) {
            *slot = snapshot;
        }
        Ok(out)
    }
}

impl<L> SharedRegistry<L> {
    /// Looks up the pool for `{x, y}` among published pools.
    #[must_use]
    pub fn get_pair(&self, x: TokenId, y: TokenId) -> Option<PoolId> {
        let key = PairKey::new(x, y).ok()?;
        self.published.read().index.get(&key).copied()
    }

    /// Latest published snapshot of `pool`.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] for an unknown id.
    pub fn snapshot(&self, pool: PoolId) -> Result<Arc<PoolSnapshot>> {
        self.published
            .read()
            .snapshots
            .get(pool.index())
            .cloned()
            .ok_or(DexError::PairNotFound)
    }

    /// Number of published pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.published.read().snapshots.len()
    }

    /// Reserves as of the latest committed mutation.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] for an unknown id.
    pub fn get_reserves(&self, pool: PoolId) -> Result<Reserves> {
        Ok(self.snapshot(pool)?.get_reserves())
    }

    /// Quote against the latest published reserves.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] or see [`PoolView::get_amount_out`].
    pub fn get_amount_out(&self, pool: PoolId, token_in: TokenId, amount_in: Amount) -> Result<Amount> {
        self.snapshot(pool)?.get_amount_out(token_in, amount_in)
    }

    /// Inverse quote against the latest published reserves.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] or see [`PoolView::get_amount_in`].
    pub fn get_amount_in(&self, pool: PoolId, token_in: TokenId, amount_out: Amount) -> Result<Amount> {
        self.snapshot(pool)?.get_amount_in(token_in, amount_out)
    }
}
