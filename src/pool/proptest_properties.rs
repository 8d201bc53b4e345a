//! Property-based tests for pool invariants.
//!
//! 1. **k monotonicity**: `reserve_a × reserve_b` never decreases over swaps.
//! 2. **Empty iff no liquidity**: across random operation sequences.
//! 3. **Share conservation**: balances always sum to the total supply.
//! 4. **Full redemption**: redeeming every share leaves exactly zero.
//! 5. **Balanced deposits**: a ratio-respecting deposit keeps the price.
//! 6. **Round trip**: A→B→A never returns more than was sold.
//! 7. **Quote fidelity**: a quote equals the executed output.

use proptest::prelude::*;

use super::{get_amount_out, Pool};
use crate::assets::InMemoryAssetLedger;
use crate::config::PoolConfig;
use crate::domain::{Amount, FeeTier, Liquidity, ParticipantId, SwapDirection};
use crate::traits::AssetLedger;

type TestPool = Pool<InMemoryAssetLedger, InMemoryAssetLedger>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDS: u128 = u128::MAX / 16;

fn participant(index: usize) -> ParticipantId {
    let mut bytes = [0u8; 32];
    bytes[0] = u8::try_from(index + 1).unwrap_or(u8::MAX);
    ParticipantId::from_bytes(bytes)
}

fn participants() -> [ParticipantId; 3] {
    [participant(0), participant(1), participant(2)]
}

fn ledger(symbol: &str, pool_account: ParticipantId) -> InMemoryAssetLedger {
    let mut ledger = InMemoryAssetLedger::new(symbol);
    for who in participants() {
        let Ok(()) = ledger.mint(who, Amount::new(FUNDS)) else {
            panic!("mint");
        };
        let Ok(()) = ledger.approve(who, pool_account, Amount::MAX) else {
            panic!("approve");
        };
    }
    ledger
}

fn make_pool(fee: FeeTier) -> TestPool {
    let Ok(config) = PoolConfig::new(fee, PoolConfig::default().pool_account()) else {
        panic!("valid config");
    };
    let a = ledger("TKA", config.pool_account());
    let b = ledger("TKB", config.pool_account());
    let Ok(pool) = Pool::new(config, a, b) else {
        panic!("valid pool");
    };
    pool
}

fn seeded(ra: u128, rb: u128) -> TestPool {
    let mut pool = make_pool(FeeTier::default());
    let Ok(_) = pool.add_liquidity(participant(0), Amount::new(ra), Amount::new(rb)) else {
        panic!("seed");
    };
    pool
}

fn assert_ledger_invariants(pool: &TestPool) -> Result<(), TestCaseError> {
    let (ra, rb) = pool.get_reserves();
    let total = pool.total_liquidity();
    prop_assert_eq!(ra.is_zero(), rb.is_zero());
    prop_assert_eq!(ra.is_zero(), total.is_zero());

    let sum: u128 = pool.reserves().holders().map(|(_, l)| l.get()).sum();
    prop_assert_eq!(sum, total.get());

    let account = pool.config().pool_account();
    prop_assert_eq!(pool.asset_a().balance_of(&account), ra);
    prop_assert_eq!(pool.asset_b().balance_of(&account), rb);
    Ok(())
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10^24], covering 18-decimal magnitudes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000_000_000_000_000u128
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![Just(SwapDirection::AToB), Just(SwapDirection::BToA)]
}

#[derive(Debug, Clone)]
enum Op {
    Add { who: usize, a: u128, b: u128 },
    Remove { who: usize, percent: u128 },
    Swap { who: usize, direction: SwapDirection, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3, 1u128..1_000_000_000, 1u128..1_000_000_000)
            .prop_map(|(who, a, b)| Op::Add { who, a, b }),
        (0usize..3, 1u128..=100).prop_map(|(who, percent)| Op::Remove { who, percent }),
        (0usize..3, direction_strategy(), 1u128..1_000_000_000)
            .prop_map(|(who, direction, amount)| Op::Swap { who, direction, amount }),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_k_never_decreases_over_swaps(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((direction_strategy(), 1u128..1_000_000_000_000u128), 1..20),
    ) {
        let mut pool = seeded(ra, rb);
        for (direction, amount) in swaps {
            let k_before = pool.constant_product();
            if pool.swap_exact_in(participant(1), direction, Amount::new(amount), None).is_ok() {
                prop_assert!(pool.constant_product() >= k_before);
            } else {
                prop_assert_eq!(pool.constant_product(), k_before);
            }
        }
    }

    #[test]
    fn prop_invariants_hold_over_random_operations(
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut pool = make_pool(FeeTier::default());
        let who = participants();
        for op in ops {
            match op {
                Op::Add { who: i, a, b } => {
                    let _ = pool.add_liquidity(who[i], Amount::new(a), Amount::new(b));
                }
                Op::Remove { who: i, percent } => {
                    let held = pool.liquidity_of(&who[i]).get();
                    let shares = held * percent / 100;
                    let _ = pool.remove_liquidity(who[i], Liquidity::new(shares));
                }
                Op::Swap { who: i, direction, amount } => {
                    let _ = pool.swap_exact_in(who[i], direction, Amount::new(amount), None);
                }
            }
            assert_ledger_invariants(&pool)?;
        }
    }

    #[test]
    fn prop_full_redemption_drains_to_zero(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((direction_strategy(), 1u128..1_000_000_000u128), 0..10),
    ) {
        let mut pool = seeded(ra, rb);
        for (direction, amount) in swaps {
            let _ = pool.swap_exact_in(participant(1), direction, Amount::new(amount), None);
        }
        let reserves = pool.get_reserves();
        let shares = pool.liquidity_of(&participant(0));
        let Ok(out) = pool.remove_liquidity(participant(0), shares) else {
            return Err(TestCaseError::fail("full redemption failed"));
        };
        prop_assert_eq!(out, reserves);
        prop_assert_eq!(pool.get_reserves(), (Amount::ZERO, Amount::ZERO));
        prop_assert_eq!(pool.total_liquidity(), Liquidity::ZERO);
    }

    #[test]
    fn prop_balanced_deposit_preserves_price(
        ra in 1u128..1_000_000_000_000u128,
        rb in 1u128..1_000_000_000_000u128,
        multiple in 1u128..1_000,
    ) {
        let mut pool = seeded(ra, rb);
        let before = pool.get_price();
        let result = pool.add_liquidity(
            participant(1),
            Amount::new(ra * multiple),
            Amount::new(rb * multiple),
        );
        prop_assert!(result.is_ok());
        prop_assert_eq!(pool.get_price(), before);
    }

    #[test]
    fn prop_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let mut pool = seeded(ra, rb);

        let Ok(received_b) = pool.swap_a_for_b(participant(1), Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(final_a) = pool.swap_b_for_a(participant(1), received_b) else {
            return Ok(());
        };
        prop_assert!(
            final_a.get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            final_a, swap_in
        );
    }

    #[test]
    fn prop_quote_matches_execution(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        direction in direction_strategy(),
        amount in 1u128..1_000_000_000_000_000u128,
    ) {
        let mut pool = seeded(ra, rb);
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::AToB => pool.get_reserves(),
            SwapDirection::BToA => {
                let (a, b) = pool.get_reserves();
                (b, a)
            }
        };
        let quoted = get_amount_out(Amount::new(amount), reserve_in, reserve_out, pool.fee_tier());
        let executed = pool.swap_exact_in(participant(1), direction, Amount::new(amount), None);
        match (quoted, executed) {
            (Ok(q), Ok(e)) => prop_assert_eq!(q, e),
            (Ok(q), Err(_)) => prop_assert!(q.is_zero()),
            (Err(q), Err(e)) => prop_assert_eq!(q, e),
            (Err(_), Ok(_)) => return Err(TestCaseError::fail("executed a swap that failed to quote")),
        }
        prop_assert!(
            pool.get_reserves().0 > Amount::ZERO && pool.get_reserves().1 > Amount::ZERO
        );
    }
}
