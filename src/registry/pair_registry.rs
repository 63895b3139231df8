//! Registry that creates, finds and drives pools.

use std::collections::HashMap;

use tracing::info;

use crate::config::DexConfig;
use crate::domain::{
    AccountId, Amount, DexEvent, LiquidityReceipt, PairKey, PoolId, Reserves, Shares, SwapResult,
    TokenId,
};
use crate::error::{DexError, Result};
use crate::pool::{LiquidityPool, PoolSnapshot};
use crate::traits::{PoolView, TokenLedger};

/// Maps each canonical [`PairKey`] to exactly one [`LiquidityPool`] and
/// owns the token ledger the pools settle against.
///
/// Every mutation takes `&mut self`, so a registry has a single writer
/// and a ledger call cannot re-enter a pool mid-operation. For shared
/// use across threads, wrap it in a
/// [`SharedRegistry`](crate::sync::SharedRegistry).
///
/// # Example
///
/// ```rust
/// use lite_dex::config::DexConfig;
/// use lite_dex::domain::{AccountId, Amount, TokenId};
/// use lite_dex::ledger::InMemoryLedger;
/// use lite_dex::registry::PairRegistry;
/// use lite_dex::traits::TokenLedger;
///
/// let (tka, tkb) = (TokenId::from_label("TKA"), TokenId::from_label("TKB"));
/// let alice = AccountId::from_label("alice");
///
/// let mut dex = PairRegistry::new(DexConfig::default(), InMemoryLedger::new()).unwrap();
/// let id = dex.create_pair(tka, tkb).unwrap();
/// assert_eq!(dex.get_pair(tkb, tka), Some(id));
///
/// let pool_account = dex.pool(id).unwrap().account();
/// for token in [tka, tkb] {
///     dex.ledger_mut().mint(token, alice, Amount::new(10_000)).unwrap();
///     dex.ledger_mut().approve(token, alice, pool_account, Amount::MAX).unwrap();
/// }
///
/// dex.add_liquidity(id, alice, Amount::new(1_000), Amount::new(1_000)).unwrap();
/// let quote = dex.get_amount_out(id, tka, Amount::new(100)).unwrap();
/// let result = dex.swap(id, alice, tka, Amount::new(100), quote).unwrap();
/// assert_eq!(result.amount_out(), quote);
/// ```
#[derive(Debug)]
pub struct PairRegistry<L> {
    config: DexConfig,
    ledger: L,
    pools: Vec<LiquidityPool>,
    index: HashMap<PairKey, PoolId>,
    events: Vec<DexEvent>,
}

impl<L: TokenLedger> PairRegistry<L> {
    /// Creates an empty registry over `ledger`.
    ///
    /// # Errors
    ///
    /// [`DexError::InvalidConfiguration`] if `config` fails validation.
    pub fn new(config: DexConfig, ledger: L) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ledger,
            pools: Vec::new(),
            index: HashMap::new(),
            events: Vec::new(),
        })
    }

    /// Registers an empty pool for `{x, y}`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `x == y`.
    /// - [`DexError::AlreadyExists`] if the pair is registered, in either
    ///   order.
    pub fn create_pair(&mut self, x: TokenId, y: TokenId) -> Result<PoolId> {
        let key = PairKey::new(x, y)?;
        if self.index.contains_key(&key) {
            return Err(DexError::AlreadyExists);
        }
        let raw = u32::try_from(self.pools.len())
            .map_err(|_| DexError::ArithmeticOverflow("pool id space exhausted"))?;
        let id = PoolId::new(raw);

        let pool = LiquidityPool::new(id, key, self.config.pool().clone());
        let account = pool.account();
        self.pools.push(pool);
        self.index.insert(key, id);

        info!(pool = %id, token_a = %key.first(), token_b = %key.second(), %account, "pair created");
        self.record(DexEvent::PairCreated {
            pool: id,
            token_a: key.first(),
            token_b: key.second(),
            account,
            pair_count: self.pools.len(),
        });
        Ok(id)
    }

    /// Looks up the pool for `{x, y}`; `None` if absent or `x == y`.
    #[must_use]
    pub fn get_pair(&self, x: TokenId, y: TokenId) -> Option<PoolId> {
        let key = PairKey::new(x, y).ok()?;
        self.index.get(&key).copied()
    }

    /// Returns the pool with id `id`.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] for an unknown id.
    pub fn pool(&self, id: PoolId) -> Result<&LiquidityPool> {
        self.pools.get(id.index()).ok_or(DexError::PairNotFound)
    }

    /// Returns the pool for `{x, y}`.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] if no pool is registered for the pair.
    pub fn pool_for(&self, x: TokenId, y: TokenId) -> Result<&LiquidityPool> {
        let id = self.get_pair(x, y).ok_or(DexError::PairNotFound)?;
        self.pool(id)
    }

    /// All registered pairs in creation order.
    pub fn all_pairs(&self) -> impl Iterator<Item = (PoolId, PairKey)> + '_ {
        self.pools.iter().map(|pool| (pool.pool_id(), *pool.pair()))
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pools.len()
    }

    /// See [`LiquidityPool::add_liquidity`].
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] or any pool error.
    pub fn add_liquidity(
        &mut self,
        pool: PoolId,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityReceipt> {
        let target = self.pools.get_mut(pool.index()).ok_or(DexError::PairNotFound)?;
        let receipt = target.add_liquidity(&mut self.ledger, provider, amount_a, amount_b)?;
        self.record(DexEvent::SharesMinted {
            pool,
            provider,
            amount_a,
            amount_b,
            shares: receipt.shares,
        });
        Ok(receipt)
    }

    /// See [`LiquidityPool::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] or any pool error.
    pub fn remove_liquidity(
        &mut self,
        pool: PoolId,
        provider: AccountId,
        shares: Shares,
    ) -> Result<LiquidityReceipt> {
        let target = self.pools.get_mut(pool.index()).ok_or(DexError::PairNotFound)?;
        let receipt = target.remove_liquidity(&mut self.ledger, provider, shares)?;
        self.record(DexEvent::SharesBurned {
            pool,
            provider,
            amount_a: receipt.amount_a,
            amount_b: receipt.amount_b,
            shares,
        });
        Ok(receipt)
    }

    /// See [`LiquidityPool::swap`].
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] or any pool error.
    pub fn swap(
        &mut self,
        pool: PoolId,
        trader: AccountId,
        token_in: TokenId,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult> {
        let target = self.pools.get_mut(pool.index()).ok_or(DexError::PairNotFound)?;
        let result = target.swap(&mut self.ledger, trader, token_in, amount_in, min_amount_out)?;
        self.record(DexEvent::Swapped {
            pool,
            trader,
            token_in,
            amount_in,
            amount_out: result.amount_out(),
            reserves: result.reserves(),
        });
        Ok(result)
    }

    /// Quote for selling `amount_in` of `token_in` in `pool`.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] or see [`PoolView::get_amount_out`].
    pub fn get_amount_out(&self, pool: PoolId, token_in: TokenId, amount_in: Amount) -> Result<Amount> {
        self.pool(pool)?.get_amount_out(token_in, amount_in)
    }

    /// Input of `token_in` needed to buy `amount_out` from `pool`.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] or see [`PoolView::get_amount_in`].
    pub fn get_amount_in(&self, pool: PoolId, token_in: TokenId, amount_out: Amount) -> Result<Amount> {
        self.pool(pool)?.get_amount_in(token_in, amount_out)
    }

    /// Current reserves of `pool`.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] for an unknown id.
    pub fn get_reserves(&self, pool: PoolId) -> Result<Reserves> {
        self.pool(pool).map(PoolView::get_reserves)
    }

    /// Snapshot of `pool`.
    ///
    /// # Errors
    ///
    /// [`DexError::PairNotFound`] for an unknown id.
    pub fn snapshot(&self, pool: PoolId) -> Result<PoolSnapshot> {
        self.pool(pool).map(LiquidityPool::snapshot)
    }

    /// The registry's configuration.
    #[must_use]
    pub const fn config(&self) -> &DexConfig {
        &self.config
    }

    /// Read access to the token ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable access to the token ledger, for funding and approvals.
    ///
    /// Pool reserves are tracked by the pools, not read back from the
    /// ledger, so moving tokens into a pool account directly only
    /// donates them.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Events journaled since the last [`take_events`](Self::take_events).
    #[must_use]
    pub fn events(&self) -> &[DexEvent] {
        &self.events
    }

    /// Drains the event journal.
    pub fn take_events(&mut self) -> Vec<DexEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: DexEvent) {
        if self.config.record_events() {
            self.events.push(event);
        }
    }
}
