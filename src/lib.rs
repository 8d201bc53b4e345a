//! # dex-core
//!
//! A two-asset constant-product market maker engine.
//!
//! Participants deposit paired quantities of asset A and asset B into a
//! shared pool and receive liquidity shares; they later redeem shares for a
//! proportional slice of the reserves.  Anyone may swap one asset for the
//! other at a price set by the reserves, paying a fee that stays in the pool
//! and accrues to share holders.
//!
//! All pricing and accounting is integer arithmetic with explicit floor
//! rounding.  Products of two `u128` quantities are carried in 256 bits, so
//! 18-decimal assets never overflow an intermediate.
//!
//! # Quick Start
//!
//! ```rust
//! use dex_core::prelude::*;
//!
//! let alice = ParticipantId::from_bytes([1u8; 32]);
//! let bob = ParticipantId::from_bytes([2u8; 32]);
//! let config = PoolConfig::default();
//! let pool_account = config.pool_account();
//!
//! // 1. Two asset ledgers with funded, approved participants
//! let mut token_a = InMemoryAssetLedger::new("TKA");
//! let mut token_b = InMemoryAssetLedger::new("TKB");
//! for who in [alice, bob] {
//!     token_a.mint(who, Amount::new(1_000_000)).expect("mint");
//!     token_b.mint(who, Amount::new(1_000_000)).expect("mint");
//!     token_a.approve(who, pool_account, Amount::MAX).expect("approve");
//!     token_b.approve(who, pool_account, Amount::MAX).expect("approve");
//! }
//!
//! // 2. Create the pool and provide liquidity at a price of 2 B per A
//! let mut pool = Pool::new(config, token_a, token_b).expect("valid config");
//! let shares = pool
//!     .add_liquidity(alice, Amount::new(100_000), Amount::new(200_000))
//!     .expect("deposit");
//! assert_eq!(pool.get_price(), Price::from_raw(2 * PRICE_SCALE));
//!
//! // 3. Swap
//! let out = pool.swap_a_for_b(bob, Amount::new(1_000)).expect("swap");
//! assert!(out.get() > 0);
//!
//! // 4. Redeem everything
//! let (a, b) = pool.remove_liquidity(alice, shares).expect("redeem");
//! assert_eq!((a, b), (Amount::new(101_000), Amount::new(200_000 - out.get())));
//! assert_eq!(pool.total_liquidity(), Liquidity::ZERO);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  add_liquidity / remove_liquidity / swap_*
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐   transfer / transfer_from   ┌──────────────┐
//! │     Pool      │ ───────────────────────────▶ │ AssetLedger ×2│
//! └──────┬───────┘                              └──────────────┘
//!        │ ReserveDelta
//!        ▼
//! ┌──────────────┐
//! │ ReserveLedger │  reserves, total supply, share balances
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Price`](domain::Price), [`FeeTier`](domain::FeeTier), … |
//! | [`pool`] | [`Pool`](pool::Pool), pricing functions, events, snapshots |
//! | [`reserves`] | [`ReserveLedger`](reserves::ReserveLedger) and [`ReserveDelta`](reserves::ReserveDelta) |
//! | [`traits`] | [`AssetLedger`](traits::AssetLedger) collaborator interface |
//! | [`assets`] | [`InMemoryAssetLedger`](assets::InMemoryAssetLedger) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`math`] | Rounding division, 256-bit `mul_div`, integer square root |
//! | [`error`] | [`DexError`](error::DexError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `info` for every committed state
//! change, `debug` for quotes, `warn`/`error` for rejected deltas and
//! rollbacks.  No subscriber is installed by the library.

pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod reserves;
pub mod traits;
