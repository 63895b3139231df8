//! Lite DEX walkthrough.
//!
//! Mints two tokens, creates their pair, seeds liquidity, prices and
//! executes a swap, then withdraws everything.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=lite_dex=debug cargo run --example lite_dex
//! ```

use lite_dex::prelude::*;
use tracing_subscriber::EnvFilter;

const E18: u128 = 1_000_000_000_000_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Lite DEX (x · y = k) ===\n");

    // ── 1. Tokens and accounts ──────────────────────────────────────────
    let tka = TokenId::from_label("TKA");
    let tkb = TokenId::from_label("TKB");
    let lp = AccountId::from_label("liquidity-provider");
    let trader = AccountId::from_label("trader");

    let mut dex = PairRegistry::new(DexConfig::default(), InMemoryLedger::new())?;
    for user in [lp, trader] {
        for token in [tka, tkb] {
            dex.ledger_mut().mint(token, user, Amount::new(1_000 * E18))?;
        }
    }
    println!("TKA: {tka}");
    println!("TKB: {tkb}");

    // ── 2. Create the pair ──────────────────────────────────────────────
    let pool = dex.create_pair(tka, tkb)?;
    let account = dex.pool(pool)?.account();
    println!("\nCreated {pool}, pool account {account}");
    println!("  Lookup (TKB, TKA): {:?}", dex.get_pair(tkb, tka));

    for user in [lp, trader] {
        for token in [tka, tkb] {
            dex.ledger_mut().approve(token, user, account, Amount::MAX)?;
        }
    }

    // ── 3. Seed liquidity ───────────────────────────────────────────────
    let pair = *dex.pool(pool)?.pair();
    let (amount_a, amount_b) = if pair.first() == tka {
        (Amount::new(100 * E18), Amount::new(200 * E18))
    } else {
        (Amount::new(200 * E18), Amount::new(100 * E18))
    };
    let seeded = dex.add_liquidity(pool, lp, amount_a, amount_b)?;
    println!("\n--- Add Liquidity ---");
    println!("  Shares minted: {}", seeded.shares);
    println!("  Reserves:      {}", seeded.reserves);

    // ── 4. Quote and swap 10 TKA ────────────────────────────────────────
    let amount_in = Amount::new(10 * E18);
    let quote = dex.get_amount_out(pool, tka, amount_in)?;
    let cost = dex.get_amount_in(pool, tka, quote)?;
    println!("\n--- Quote ---");
    println!("  {amount_in} TKA -> {quote} TKB");
    println!("  {quote} TKB costs {cost} TKA");

    let result = dex.swap(pool, trader, tka, amount_in, quote)?;
    println!("\n--- Swap ---");
    println!("  {result}");
    println!("  Trader TKB: {}", dex.ledger().balance_of(tkb, trader));

    // ── 5. Withdraw everything ──────────────────────────────────────────
    let shares = dex.pool(pool)?.share_balance_of(&lp);
    let removed = dex.remove_liquidity(pool, lp, shares)?;
    println!("\n--- Remove Liquidity ---");
    println!("  Burned:   {}", removed.shares);
    println!("  Returned: {} + {}", removed.amount_a, removed.amount_b);
    println!("  Phase:    {}", dex.pool(pool)?.phase());

    println!("\n--- Events ---");
    for event in dex.take_events() {
        println!("  {event:?}");
    }

    println!("\n=== Done ===");
    Ok(())
}
