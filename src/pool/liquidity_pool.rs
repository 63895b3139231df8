//! Constant-product liquidity pool.
//!
//! The pricing invariant is `x × y = k` over the two reserves. Fees are
//! taken from the input before pricing and stay in the reserve, so `k`
//! never decreases across a swap.
//!
//! # Mutation protocol
//!
//! Every mutating method runs in four steps:
//!
//! 1. **Check** preconditions against the committed state.
//! 2. **Compute** the new reserves, share change and phase into locals.
//! 3. **Settle** the token movements through the
//!    [`TokenLedger`], all or nothing.
//! 4. **Commit** the computed state. Nothing in this step can fail.
//!
//! A failure in steps 1 to 3 leaves the pool untouched.
//!
//! # Share accounting
//!
//! | Case | Shares minted |
//! |------|---------------|
//! | First deposit | `floor(sqrt(amount_a × amount_b))` |
//! | Later deposit | `min(amount_a × T / reserve_a, amount_b × T / reserve_b)` |
//!
//! Withdrawals pay `reserve_x × shares / T` of each side, rounded down.

use tracing::debug;

use super::settlement::{settle, Leg};
use super::{PoolSnapshot, ShareLedger};
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, FeeTier, LiquidityAction, LiquidityReceipt, PairKey, PoolId, PoolPhase,
    Reserves, Rounding, Shares, Side, SwapResult, TokenId,
};
use crate::error::{DexError, Result};
use crate::math::{mul_div, sqrt_product, CheckedArithmetic, QuoteEngine};
use crate::traits::{PoolView, TokenLedger};

/// One two-token pool: reserves, LP shares and lifetime fee counters.
///
/// Pools are created by [`PairRegistry`](crate::registry::PairRegistry)
/// and hold their reserves on the ledger under
/// [`AccountId::for_pool`]. The ledger is passed into each mutating call
/// rather than stored, which lets the registry own a single ledger for
/// all of its pools.
#[derive(Debug, Clone)]
pub struct LiquidityPool {
    id: PoolId,
    pair: PairKey,
    account: AccountId,
    config: PoolConfig,
    reserves: Reserves,
    shares: ShareLedger,
    phase: PoolPhase,
    fees_a: Amount,
    fees_b: Amount,
}

impl LiquidityPool {
    /// Creates an empty pool for `pair`.
    #[must_use]
    pub fn new(id: PoolId, pair: PairKey, config: PoolConfig) -> Self {
        Self {
            id,
            pair,
            account: AccountId::for_pool(&pair),
            config,
            reserves: Reserves::EMPTY,
            shares: ShareLedger::new(),
            phase: PoolPhase::Empty,
            fees_a: Amount::ZERO,
            fees_b: Amount::ZERO,
        }
    }

    /// Ledger account that holds this pool's reserves.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Name of the LP share token.
    #[must_use]
    pub fn share_name(&self) -> &str {
        self.config.share_name()
    }

    /// Symbol of the LP share token.
    #[must_use]
    pub fn share_symbol(&self) -> &str {
        self.config.share_symbol()
    }

    /// Outstanding LP shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.shares.total()
    }

    /// LP shares held by `holder`.
    #[must_use]
    pub fn share_balance_of(&self, holder: &AccountId) -> Shares {
        self.shares.balance_of(holder)
    }

    /// Read access to the share ledger.
    #[must_use]
    pub const fn share_ledger(&self) -> &ShareLedger {
        &self.shares
    }

    /// Lifetime fees retained on the side of `token`.
    ///
    /// These are counters only; the fees themselves are part of the
    /// reserves and accrue to share holders.
    ///
    /// # Errors
    ///
    /// [`DexError::InvalidToken`] if `token` is not in the pair.
    pub fn accumulated_fees(&self, token: TokenId) -> Result<Amount> {
        Ok(match self.pair.side_of(&token)? {
            Side::A => self.fees_a,
            Side::B => self.fees_b,
        })
    }

    /// Immutable copy of the state quotes depend on.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot::new(
            self.id,
            self.pair,
            self.account,
            self.config.fee_tier(),
            self.reserves,
            self.shares.total(),
            self.phase,
        )
    }

    /// Deposits `amount_a` and `amount_b` from `provider` and mints shares.
    ///
    /// Both amounts are added to the reserves in full; a deposit off the
    /// current ratio is credited by its limiting side and the excess
    /// accrues to existing holders.
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientLiquidity`] if either amount is zero or
    ///   the deposit would mint zero shares.
    /// - [`DexError::InsufficientAllowance`] / [`DexError::InsufficientBalance`]
    ///   from the ledger.
    /// - [`DexError::ArithmeticOverflow`] if a reserve or the supply
    ///   would exceed `u128`.
    pub fn add_liquidity<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityReceipt> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(DexError::InsufficientLiquidity);
        }

        let total = self.shares.total();
        let minted = if total.is_zero() {
            Shares::new(sqrt_product(amount_a.get(), amount_b.get()))
        } else {
            let by_a = mul_div(
                amount_a.get(),
                total.get(),
                self.reserves.reserve_a().get(),
                Rounding::Down,
            )?;
            let by_b = mul_div(
                amount_b.get(),
                total.get(),
                self.reserves.reserve_b().get(),
                Rounding::Down,
            )?;
            Shares::new(by_a.min(by_b))
        };
        if minted.is_zero() {
            return Err(DexError::InsufficientLiquidity);
        }

        let reserves = Reserves::new(
            self.reserves.reserve_a().safe_add(&amount_a)?,
            self.reserves.reserve_b().safe_add(&amount_b)?,
        );
        let change = self.shares.plan_mint(provider, minted)?;
        let phase = match self.phase {
            PoolPhase::Empty => PoolPhase::Seeded,
            PoolPhase::Seeded | PoolPhase::Active => PoolPhase::Active,
        };

        settle(
            ledger,
            self.account,
            &[
                Leg::Pull {
                    token: self.pair.first(),
                    user: provider,
                    amount: amount_a,
                },
                Leg::Pull {
                    token: self.pair.second(),
                    user: provider,
                    amount: amount_b,
                },
            ],
        )?;

        self.shares.apply(change);
        self.reserves = reserves;
        self.phase = phase;

        debug!(pool = %self.id, %provider, %amount_a, %amount_b, %minted, reserves = %reserves, "liquidity added");
        Ok(self.receipt(LiquidityAction::Added, provider, minted, amount_a, amount_b))
    }

    /// Burns `shares` from `provider` and pays out its pro-rata reserves.
    ///
    /// Burning the entire supply pays out both reserves exactly and
    /// returns the pool to [`PoolPhase::Empty`].
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientBalance`] if `shares` is zero or exceeds
    ///   the provider's balance.
    /// - [`DexError::InsufficientLiquidity`] if both payouts round to zero.
    pub fn remove_liquidity<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        shares: Shares,
    ) -> Result<LiquidityReceipt> {
        let change = self.shares.plan_burn(provider, shares)?;

        let total = self.shares.total();
        let amount_a = Amount::new(mul_div(
            self.reserves.reserve_a().get(),
            shares.get(),
            total.get(),
            Rounding::Down,
        )?);
        let amount_b = Amount::new(mul_div(
            self.reserves.reserve_b().get(),
            shares.get(),
            total.get(),
            Rounding::Down,
        )?);
        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(DexError::InsufficientLiquidity);
        }

        let reserves = Reserves::new(
            self.reserves.reserve_a().safe_sub(&amount_a)?,
            self.reserves.reserve_b().safe_sub(&amount_b)?,
        );
        let phase = if change.total_after().is_zero() {
            PoolPhase::Empty
        } else {
            self.phase
        };

        settle(
            ledger,
            self.account,
            &[
                Leg::Push {
                    token: self.pair.first(),
                    user: provider,
                    amount: amount_a,
                },
                Leg::Push {
                    token: self.pair.second(),
                    user: provider,
                    amount: amount_b,
                },
            ],
        )?;

        self.shares.apply(change);
        self.reserves = reserves;
        self.phase = phase;

        debug!(pool = %self.id, %provider, %shares, %amount_a, %amount_b, reserves = %reserves, "liquidity removed");
        Ok(self.receipt(LiquidityAction::Removed, provider, shares, amount_a, amount_b))
    }

    /// Sells `amount_in` of `token_in` for the other token.
    ///
    /// The output is exactly what [`PoolView::get_amount_out`] returns
    /// for the same input against the same reserves.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`DexError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`DexError::InsufficientLiquidity`] if the pool is empty.
    /// - [`DexError::InsufficientOutputAmount`] if the output is zero or
    ///   below `min_amount_out`.
    /// - Ledger errors from settlement.
    pub fn swap<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        token_in: TokenId,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult> {
        let side_in = self.pair.side_of(&token_in)?;
        if amount_in.is_zero() {
            return Err(DexError::InsufficientInputAmount);
        }
        let (reserve_in, reserve_out) = self.reserves.oriented(side_in);
        let quote = QuoteEngine::exact_in(amount_in, reserve_in, reserve_out, self.fee_tier())?;
        if quote.amount_out.is_zero() || quote.amount_out < min_amount_out {
            return Err(DexError::InsufficientOutputAmount {
                quoted: quote.amount_out,
                minimum: min_amount_out,
            });
        }

        let side_out = side_in.flip();
        let reserves = self
            .reserves
            .with(side_in, reserve_in.safe_add(&amount_in)?)
            .with(side_out, reserve_out.safe_sub(&quote.amount_out)?);
        debug_assert!(reserves.product() >= self.reserves.product());
        let (fees_a, fees_b) = match side_in {
            Side::A => (self.fees_a.safe_add(&quote.fee)?, self.fees_b),
            Side::B => (self.fees_a, self.fees_b.safe_add(&quote.fee)?),
        };
        let token_out = self.pair.token(side_out);

        settle(
            ledger,
            self.account,
            &[
                Leg::Pull {
                    token: token_in,
                    user: trader,
                    amount: amount_in,
                },
                Leg::Push {
                    token: token_out,
                    user: trader,
                    amount: quote.amount_out,
                },
            ],
        )?;

        self.reserves = reserves;
        self.phase = PoolPhase::Active;
        self.fees_a = fees_a;
        self.fees_b = fees_b;

        debug!(
            pool = %self.id,
            %trader,
            %token_in,
            %amount_in,
            amount_out = %quote.amount_out,
            fee = %quote.fee,
            reserves = %reserves,
            "swap executed"
        );
        Ok(SwapResult::new(
            self.id,
            token_in,
            token_out,
            amount_in,
            quote.amount_out,
            quote.fee,
            reserves,
        ))
    }

    fn receipt(
        &self,
        action: LiquidityAction,
        provider: AccountId,
        shares: Shares,
        amount_a: Amount,
        amount_b: Amount,
    ) -> LiquidityReceipt {
        LiquidityReceipt {
            action,
            pool: self.id,
            provider,
            shares,
            amount_a,
            amount_b,
            reserves: self.reserves,
            total_shares: self.shares.total(),
        }
    }
}

impl PoolView for LiquidityPool {
    fn pool_id(&self) -> PoolId {
        self.id
    }

    fn pair(&self) -> &PairKey {
        &self.pair
    }

    fn fee_tier(&self) -> FeeTier {
        self.config.fee_tier()
    }

    fn reserves(&self) -> Reserves {
        self.reserves
    }

    fn phase(&self) -> PoolPhase {
        self.phase
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryLedger;

    const E18: u128 = 1_000_000_000_000_000_000;

    struct Fixture {
        pool: LiquidityPool,
        ledger: InMemoryLedger,
        tka: TokenId,
        tkb: TokenId,
        alice: AccountId,
        bob: AccountId,
    }

    fn fixture() -> Fixture {
        let tka = TokenId::from_bytes([1; 32]);
        let tkb = TokenId::from_bytes([2; 32]);
        let Ok(pair) = PairKey::new(tka, tkb) else {
            panic!("pair");
        };
        let pool = LiquidityPool::new(PoolId::new(0), pair, PoolConfig::default());
        let alice = AccountId::from_label("alice");
        let bob = AccountId::from_label("bob");
        let mut ledger = InMemoryLedger::new();
        for holder in [alice, bob] {
            for token in [tka, tkb] {
                let Ok(()) = ledger.mint(token, holder, Amount::new(1_000_000 * E18)) else {
                    panic!("mint");
                };
                let Ok(()) = ledger.approve(token, holder, pool.account(), Amount::MAX) else {
                    panic!("approve");
                };
            }
        }
        Fixture {
            pool,
            ledger,
            tka,
            tkb,
            alice,
            bob,
        }
    }

    fn seeded(a: u128, b: u128) -> Fixture {
        let mut f = fixture();
        let Ok(_) = f
            .pool
            .add_liquidity(&mut f.ledger, f.alice, Amount::new(a), Amount::new(b))
        else {
            panic!("seed");
        };
        f
    }

    #[test]
    fn first_deposit_sets_reserves_and_mints_sqrt() {
        let mut f = fixture();
        let Ok(receipt) =
            f.pool
                .add_liquidity(&mut f.ledger, f.alice, Amount::new(100 * E18), Amount::new(200 * E18))
        else {
            panic!("add_liquidity");
        };
        assert_eq!(
            f.pool.get_reserves(),
            Reserves::new(Amount::new(100 * E18), Amount::new(200 * E18))
        );
        assert_eq!(receipt.shares, Shares::new(141_421_356_237_309_504_880));
        assert_eq!(f.pool.share_balance_of(&f.alice), receipt.shares);
        assert_eq!(f.pool.phase(), PoolPhase::Seeded);
        assert_eq!(
            f.ledger.balance_of(f.tka, f.pool.account()),
            Amount::new(100 * E18)
        );
    }

    #[test]
    fn zero_side_deposit_rejected() {
        let mut f = fixture();
        assert_eq!(
            f.pool
                .add_liquidity(&mut f.ledger, f.alice, Amount::ZERO, Amount::new(1)),
            Err(DexError::InsufficientLiquidity)
        );
        assert_eq!(f.pool.phase(), PoolPhase::Empty);
    }

    #[test]
    fn proportional_deposit_mints_pro_rata() {
        let mut f = seeded(1_000, 4_000);
        let total = f.pool.total_shares();
        assert_eq!(total, Shares::new(2_000));
        let Ok(receipt) =
            f.pool
                .add_liquidity(&mut f.ledger, f.bob, Amount::new(500), Amount::new(2_000))
        else {
            panic!("add_liquidity");
        };
        assert_eq!(receipt.shares, Shares::new(1_000));
        assert_eq!(receipt.total_shares, Shares::new(3_000));
        assert_eq!(f.pool.phase(), PoolPhase::Active);
    }

    #[test]
    fn imbalanced_deposit_uses_limiting_side_and_keeps_excess() {
        let mut f = seeded(1_000, 4_000);
        let Ok(receipt) =
            f.pool
                .add_liquidity(&mut f.ledger, f.bob, Amount::new(500), Amount::new(8_000))
        else {
            panic!("add_liquidity");
        };
        assert_eq!(receipt.shares, Shares::new(1_000));
        assert_eq!(
            f.pool.get_reserves(),
            Reserves::new(Amount::new(1_500), Amount::new(12_000))
        );
    }

    #[test]
    fn dust_deposit_minting_nothing_is_rejected() {
        // T = sqrt(1000e18) ~ 3.2e10 shares against 1000e18 of token A,
        // so one unit of A is worth less than one share.
        let mut f = seeded(1_000 * E18, 1);
        let before = f.pool.snapshot();
        assert_eq!(
            f.pool
                .add_liquidity(&mut f.ledger, f.bob, Amount::new(1), Amount::new(1)),
            Err(DexError::InsufficientLiquidity)
        );
        assert_eq!(f.pool.snapshot(), before);
        assert_eq!(f.ledger.balance_of(f.tka, f.bob), Amount::new(1_000_000 * E18));
    }

    #[test]
    fn remove_all_returns_to_empty() {
        let mut f = seeded(100 * E18, 200 * E18);
        let shares = f.pool.share_balance_of(&f.alice);
        let Ok(receipt) = f.pool.remove_liquidity(&mut f.ledger, f.alice, shares) else {
            panic!("remove_liquidity");
        };
        assert_eq!(receipt.amount_a, Amount::new(100 * E18));
        assert_eq!(receipt.amount_b, Amount::new(200 * E18));
        assert_eq!(f.pool.get_reserves(), Reserves::EMPTY);
        assert_eq!(f.pool.total_shares(), Shares::ZERO);
        assert_eq!(f.pool.phase(), PoolPhase::Empty);
        assert_eq!(f.ledger.balance_of(f.tka, f.alice), Amount::new(1_000_000 * E18));
    }

    #[test]
    fn pool_can_be_reseeded_after_draining() {
        let mut f = seeded(1_000, 1_000);
        let shares = f.pool.total_shares();
        let Ok(_) = f.pool.remove_liquidity(&mut f.ledger, f.alice, shares) else {
            panic!("remove_liquidity");
        };
        let Ok(receipt) =
            f.pool
                .add_liquidity(&mut f.ledger, f.bob, Amount::new(9), Amount::new(4))
        else {
            panic!("reseed");
        };
        assert_eq!(receipt.shares, Shares::new(6));
        assert_eq!(f.pool.phase(), PoolPhase::Seeded);
    }

    #[test]
    fn over_remove_rejected_without_change() {
        let mut f = seeded(1_000, 1_000);
        let before = f.pool.snapshot();
        let held = f.pool.share_balance_of(&f.alice);
        assert_eq!(
            f.pool
                .remove_liquidity(&mut f.ledger, f.alice, Shares::new(held.get() + 1)),
            Err(DexError::InsufficientBalance)
        );
        assert_eq!(
            f.pool.remove_liquidity(&mut f.ledger, f.bob, Shares::new(1)),
            Err(DexError::InsufficientBalance)
        );
        assert_eq!(
            f.pool.remove_liquidity(&mut f.ledger, f.alice, Shares::ZERO),
            Err(DexError::InsufficientBalance)
        );
        assert_eq!(f.pool.snapshot(), before);
    }

    #[test]
    fn swap_matches_quote_and_moves_balances() {
        let mut f = seeded(1_000 * E18, 1_000 * E18);
        let amount_in = Amount::new(100 * E18);
        let Ok(quote) = f.pool.get_amount_out(f.tka, amount_in) else {
            panic!("quote");
        };
        let before_b = f.ledger.balance_of(f.tkb, f.bob);
        let Ok(result) = f
            .pool
            .swap(&mut f.ledger, f.bob, f.tka, amount_in, Amount::ZERO)
        else {
            panic!("swap");
        };
        assert_eq!(result.amount_out(), quote);
        assert_eq!(result.token_out(), f.tkb);
        let after_b = f.ledger.balance_of(f.tkb, f.bob);
        assert_eq!(after_b.get() - before_b.get(), quote.get());
        assert_eq!(f.pool.phase(), PoolPhase::Active);
        assert_eq!(
            f.pool.get_reserves(),
            Reserves::new(
                Amount::new(1_100 * E18),
                Amount::new(1_000 * E18 - quote.get())
            )
        );
    }

    #[test]
    fn swap_in_reverse_direction() {
        let mut f = seeded(1_000, 2_000);
        let Ok(result) = f
            .pool
            .swap(&mut f.ledger, f.bob, f.tkb, Amount::new(1_000), Amount::ZERO)
        else {
            panic!("swap");
        };
        // net 997; 1000 * 997 / (2000 + 997) = 332.66
        assert_eq!(result.amount_out(), Amount::new(332));
        assert_eq!(result.fee(), Amount::new(3));
        assert_eq!(f.pool.accumulated_fees(f.tkb), Ok(Amount::new(3)));
        assert_eq!(f.pool.accumulated_fees(f.tka), Ok(Amount::ZERO));
    }

    #[test]
    fn swap_slippage_bound_rejected_without_change() {
        let mut f = seeded(1_000 * E18, 1_000 * E18);
        let amount_in = Amount::new(100 * E18);
        let Ok(quote) = f.pool.get_amount_out(f.tka, amount_in) else {
            panic!("quote");
        };
        let min = Amount::new(quote.get() + 1);
        let before = f.pool.snapshot();
        let bob_a = f.ledger.balance_of(f.tka, f.bob);
        assert_eq!(
            f.pool.swap(&mut f.ledger, f.bob, f.tka, amount_in, min),
            Err(DexError::InsufficientOutputAmount {
                quoted: quote,
                minimum: min
            })
        );
        assert_eq!(f.pool.snapshot(), before);
        assert_eq!(f.ledger.balance_of(f.tka, f.bob), bob_a);
    }

    #[test]
    fn swap_precondition_errors() {
        let mut f = fixture();
        let foreign = TokenId::from_bytes([9; 32]);
        assert!(matches!(
            f.pool
                .swap(&mut f.ledger, f.bob, foreign, Amount::new(1), Amount::ZERO),
            Err(DexError::InvalidToken(_))
        ));
        assert_eq!(
            f.pool
                .swap(&mut f.ledger, f.bob, f.tka, Amount::ZERO, Amount::ZERO),
            Err(DexError::InsufficientInputAmount)
        );
        assert_eq!(
            f.pool
                .swap(&mut f.ledger, f.bob, f.tka, Amount::new(1), Amount::ZERO),
            Err(DexError::InsufficientLiquidity)
        );
    }

    #[test]
    fn dust_swap_with_zero_output_rejected() {
        let mut f = seeded(1_000 * E18, 1_000 * E18);
        assert_eq!(
            f.pool
                .swap(&mut f.ledger, f.bob, f.tka, Amount::new(1), Amount::ZERO),
            Err(DexError::InsufficientOutputAmount {
                quoted: Amount::ZERO,
                minimum: Amount::ZERO
            })
        );
    }

    #[test]
    fn swap_without_allowance_leaves_pool_unchanged() {
        let mut f = seeded(1_000, 1_000);
        let carol = AccountId::from_label("carol");
        let Ok(()) = f.ledger.mint(f.tka, carol, Amount::new(500)) else {
            panic!("mint");
        };
        let before = f.pool.snapshot();
        assert_eq!(
            f.pool
                .swap(&mut f.ledger, carol, f.tka, Amount::new(100), Amount::ZERO),
            Err(DexError::InsufficientAllowance)
        );
        assert_eq!(f.pool.snapshot(), before);
        assert_eq!(f.ledger.balance_of(f.tka, carol), Amount::new(500));
    }

    #[test]
    fn pool_account_cannot_trade_against_itself() {
        let mut f = seeded(1_000 * E18, 1_000 * E18);
        let account = f.pool.account();
        let before = f.pool.snapshot();
        let balance = f.ledger.balance_of(f.tka, account);
        assert!(matches!(
            f.pool
                .swap(&mut f.ledger, account, f.tka, Amount::new(E18), Amount::ZERO),
            Err(DexError::InvalidAccount(_))
        ));
        assert_eq!(f.pool.snapshot(), before);
        assert_eq!(f.ledger.balance_of(f.tka, account), balance);
    }

    #[test]
    fn product_never_decreases_across_swaps() {
        let mut f = seeded(5_000, 7_000);
        let mut k = f.pool.get_reserves().product();
        for (i, amount) in [1_000u128, 3, 250, 4_000, 17].into_iter().enumerate() {
            let token = if i % 2 == 0 { f.tka } else { f.tkb };
            let Ok(_) = f
                .pool
                .swap(&mut f.ledger, f.bob, token, Amount::new(amount), Amount::ZERO)
            else {
                panic!("swap {i}");
            };
            let next = f.pool.get_reserves().product();
            assert!(next >= k);
            k = next;
        }
    }

    #[test]
    fn inverse_quote_buys_requested_amount() {
        let mut f = seeded(1_000 * E18, 1_000 * E18);
        let want = Amount::new(50 * E18);
        let Ok(need) = f.pool.get_amount_in(f.tka, want) else {
            panic!("amount_in");
        };
        let Ok(result) = f.pool.swap(&mut f.ledger, f.bob, f.tka, need, want) else {
            panic!("swap");
        };
        assert!(result.amount_out() >= want);
    }

    #[test]
    fn share_metadata_comes_from_config() {
        let f = fixture();
        assert_eq!(f.pool.share_name(), "LiteDEX LP Token");
        assert_eq!(f.pool.share_symbol(), "LDX-LP");
        assert_eq!(f.pool.share_ledger().holder_count(), 0);
    }
}
