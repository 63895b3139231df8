//! Property-based tests for the pool invariants.
//!
//! 1. **Swap reversibility**: a round trip A→B→A never returns more
//!    than was put in.
//! 2. **Invariant preservation**: `reserve_a × reserve_b` is
//!    non-decreasing across any sequence of swaps.
//! 3. **Quote fidelity**: a quote equals the realized balance change.
//! 4. **Share conservation**: the sum of balances equals total supply
//!    after any sequence of deposits and withdrawals.
//! 5. **No free value**: depositing then withdrawing the same shares
//!    returns at most what was deposited.
//! 6. **Exact-out minimality**: the inverse quote is the smallest input
//!    that buys the requested output.
//! 7. **Atomic rejection**: a slippage failure leaves pool and ledger
//!    untouched.

use proptest::prelude::*;

use super::LiquidityPool;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, PairKey, PoolId, Shares, TokenId};
use crate::error::DexError;
use crate::ledger::InMemoryLedger;
use crate::math::QuoteEngine;
use crate::traits::{PoolView, TokenLedger};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = u128::MAX / 4;

fn tka() -> TokenId {
    TokenId::from_bytes([1u8; 32])
}

fn tkb() -> TokenId {
    TokenId::from_bytes([2u8; 32])
}

fn lp(i: u8) -> AccountId {
    AccountId::from_bytes([0x10 + i; 32])
}

fn trader() -> AccountId {
    AccountId::from_label("trader")
}

fn setup(ra: u128, rb: u128) -> (LiquidityPool, InMemoryLedger) {
    let Ok(pair) = PairKey::new(tka(), tkb()) else {
        panic!("valid pair");
    };
    let mut pool = LiquidityPool::new(PoolId::new(0), pair, PoolConfig::default());
    let mut ledger = InMemoryLedger::new();
    for holder in [lp(0), lp(1), lp(2), trader()] {
        for token in [tka(), tkb()] {
            let Ok(()) = ledger.mint(token, holder, Amount::new(FUNDING / 4)) else {
                panic!("mint");
            };
            let Ok(()) = ledger.approve(token, holder, pool.account(), Amount::MAX) else {
                panic!("approve");
            };
        }
    }
    let Ok(_) = pool.add_liquidity(&mut ledger, lp(0), Amount::new(ra), Amount::new(rb)) else {
        panic!("seed {ra}/{rb}");
    };
    (pool, ledger)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves from dust-sized to 10^30 (a trillion 18-decimal tokens).
fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        1_000u128..=10_000_000u128,
        10u128.pow(15)..=10u128.pow(30),
    ]
}

fn fraction_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000u128
}

// ---------------------------------------------------------------------------
// Properties 1-3: swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        permille in fraction_strategy(),
    ) {
        let (mut pool, mut ledger) = setup(ra, rb);
        let amount_in = (ra / 1_000 * permille).max(1);

        let Ok(ab) = pool.swap(&mut ledger, trader(), tka(), Amount::new(amount_in), Amount::ZERO) else {
            return Ok(());
        };
        let Ok(ba) = pool.swap(&mut ledger, trader(), tkb(), ab.amount_out(), Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(
            ba.amount_out().get() <= amount_in,
            "round trip returned {} for {}", ba.amount_out(), amount_in
        );
    }

    #[test]
    fn prop_product_non_decreasing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        steps in prop::collection::vec((any::<bool>(), fraction_strategy()), 1..12),
    ) {
        let (mut pool, mut ledger) = setup(ra, rb);
        let mut k = pool.get_reserves().product();
        for (a_to_b, permille) in steps {
            let (token, reserve) = if a_to_b {
                (tka(), pool.get_reserves().reserve_a())
            } else {
                (tkb(), pool.get_reserves().reserve_b())
            };
            let amount = (reserve.get() / 1_000 * permille).max(1);
            match pool.swap(&mut ledger, trader(), token, Amount::new(amount), Amount::ZERO) {
                Ok(_) | Err(DexError::InsufficientOutputAmount { .. }) => {}
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
            let next = pool.get_reserves().product();
            prop_assert!(next >= k);
            k = next;
        }
    }

    #[test]
    fn prop_quote_equals_realized_output(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        permille in fraction_strategy(),
    ) {
        let (mut pool, mut ledger) = setup(ra, rb);
        let amount_in = Amount::new((rb / 1_000 * permille).max(1));
        let Ok(quote) = pool.get_amount_out(tkb(), amount_in) else {
            return Ok(());
        };
        let before = ledger.balance_of(tka(), trader());
        match pool.swap(&mut ledger, trader(), tkb(), amount_in, Amount::ZERO) {
            Ok(result) => {
                prop_assert_eq!(result.amount_out(), quote);
                let after = ledger.balance_of(tka(), trader());
                prop_assert_eq!(after.get() - before.get(), quote.get());
            }
            Err(DexError::InsufficientOutputAmount { quoted, .. }) => {
                prop_assert!(quote.is_zero());
                prop_assert!(quoted.is_zero());
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Properties 4-5: shares
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_conservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec((0u8..3, any::<bool>(), fraction_strategy()), 1..16),
    ) {
        let (mut pool, mut ledger) = setup(ra, rb);
        for (who, deposit, permille) in ops {
            let provider = lp(who);
            if deposit {
                let r = pool.get_reserves();
                let a = (r.reserve_a().get() / 1_000 * permille).max(1);
                let b = (r.reserve_b().get() / 1_000 * permille).max(1);
                let _ = pool.add_liquidity(&mut ledger, provider, Amount::new(a), Amount::new(b));
            } else {
                let held = pool.share_balance_of(&provider).get();
                let _ = pool.remove_liquidity(&mut ledger, provider, Shares::new(held / 1_000 * permille));
            }
            let sum: u128 = (0..3).map(|i| pool.share_balance_of(&lp(i)).get()).sum();
            prop_assert_eq!(sum, pool.total_shares().get());
            let r = pool.get_reserves();
            prop_assert_eq!(r.reserve_a().is_zero(), pool.total_shares().is_zero());
            prop_assert_eq!(r.reserve_b().is_zero(), pool.total_shares().is_zero());
        }
    }

    #[test]
    fn prop_deposit_then_withdraw_returns_no_more(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        permille in fraction_strategy(),
    ) {
        let (mut pool, mut ledger) = setup(ra, rb);
        let a = (ra / 1_000 * permille).max(1);
        let b = (rb / 1_000 * permille).max(1);
        let Ok(minted) = pool.add_liquidity(&mut ledger, lp(1), Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        let Ok(back) = pool.remove_liquidity(&mut ledger, lp(1), minted.shares) else {
            return Ok(());
        };
        prop_assert!(back.amount_a.get() <= a);
        prop_assert!(back.amount_b.get() <= b);
    }
}

// ---------------------------------------------------------------------------
// Properties 6-7: inverse quote and atomic rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exact_out_is_minimal(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        permille in 1u128..1_000u128,
    ) {
        let want = Amount::new((rb / 1_000 * permille).max(1));
        let fee = PoolConfig::default().fee_tier();
        let Ok(need) = QuoteEngine::amount_in(want, Amount::new(ra), Amount::new(rb), fee) else {
            return Ok(());
        };
        let Ok(got) = QuoteEngine::amount_out(need, Amount::new(ra), Amount::new(rb), fee) else {
            return Ok(());
        };
        prop_assert!(got >= want);
        if need.get() > 1 {
            let Ok(short) = QuoteEngine::amount_out(Amount::new(need.get() - 1), Amount::new(ra), Amount::new(rb), fee) else {
                return Ok(());
            };
            prop_assert!(short < want);
        }
    }

    #[test]
    fn prop_slippage_rejection_is_atomic(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        permille in fraction_strategy(),
    ) {
        let (mut pool, mut ledger) = setup(ra, rb);
        let amount_in = Amount::new((ra / 1_000 * permille).max(1));
        let Ok(quote) = pool.get_amount_out(tka(), amount_in) else {
            return Ok(());
        };
        let before = pool.snapshot();
        let balance = ledger.balance_of(tka(), trader());
        let min = Amount::new(quote.get() + 1);
        let result = pool.swap(&mut ledger, trader(), tka(), amount_in, min);
        let is_slippage_error = matches!(result, Err(DexError::InsufficientOutputAmount { .. }));
        prop_assert!(is_slippage_error);
        prop_assert_eq!(pool.snapshot(), before);
        prop_assert_eq!(ledger.balance_of(tka(), trader()), balance);
    }
}
