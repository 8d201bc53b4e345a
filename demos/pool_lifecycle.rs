//! Constant-product pool walkthrough.
//!
//! Deposits liquidity, trades in both directions, shows how fees raise the
//! value of each share, and redeems everything.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=dex_core=debug cargo run --example pool_lifecycle
//! ```

use dex_core::prelude::*;
use tracing_subscriber::EnvFilter;

const ETHER: u128 = 1_000_000_000_000_000_000;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dex_core=info")),
        )
        .init();

    println!("=== Constant Product Pool (x · y = k) ===\n");

    // ── 1. Asset ledgers and participants ───────────────────────────────
    let provider = ParticipantId::from_bytes([1u8; 32]);
    let trader = ParticipantId::from_bytes([2u8; 32]);
    let config = PoolConfig::default();
    let pool_account = config.pool_account();

    let mut token_a = InMemoryAssetLedger::new("TKA");
    let mut token_b = InMemoryAssetLedger::new("TKB");
    for who in [provider, trader] {
        token_a.mint(who, Amount::new(10_000 * ETHER))?;
        token_b.mint(who, Amount::new(10_000 * ETHER))?;
        token_a.approve(who, pool_account, Amount::MAX)?;
        token_b.approve(who, pool_account, Amount::MAX)?;
    }

    // ── 2. Create the pool ──────────────────────────────────────────────
    let mut pool = Pool::new(config, token_a, token_b)?;
    println!("Fee tier:    {}", pool.fee_tier());
    println!("Pool account: {pool_account}");

    // ── 3. Provide liquidity at 2 B per A ───────────────────────────────
    let shares = pool.add_liquidity(provider, Amount::new(100 * ETHER), Amount::new(200 * ETHER))?;
    let (ra, rb) = pool.get_reserves();
    println!("\nDeposited 100 A + 200 B");
    println!("  Shares minted: {shares}");
    println!("  Reserves:      {ra} / {rb}");
    println!("  Price (B/A):   {}", pool.get_price());

    // ── 4. Quote, then trade ────────────────────────────────────────────
    let quote = pool.quote_swap(SwapDirection::AToB, Amount::new(10 * ETHER))?;
    println!("\nQuote: {quote}");

    let out = pool.swap_exact_in(
        trader,
        SwapDirection::AToB,
        Amount::new(10 * ETHER),
        Some(quote.amount_out()),
    )?;
    println!("Swapped 10 A for {out} B");
    println!("  Price (B/A):   {}", pool.get_price());

    let back = pool.swap_b_for_a(trader, out)?;
    println!("Swapped {out} B back for {back} A");

    let (fees_a, fees_b) = pool.accumulated_fees();
    println!("  Fees retained: {fees_a} A, {fees_b} B");

    // ── 5. Redeem ───────────────────────────────────────────────────────
    let (a, b) = pool.remove_liquidity(provider, shares)?;
    println!("\nRedeemed {shares} shares for {a} A + {b} B");
    println!("  Pool empty:    {}", pool.snapshot().is_empty());

    // ── 6. Event log ────────────────────────────────────────────────────
    println!("\nEvents:");
    for event in pool.drain_events() {
        println!("  {}", serde_json::to_string(&event)?);
    }

    Ok(())
}
