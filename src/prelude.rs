//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use dex_core::prelude::*;
//! ```

pub use crate::assets::InMemoryAssetLedger;
pub use crate::config::PoolConfig;
pub use crate::domain::{
    Amount, Asset, BasisPoints, FeeTier, Liquidity, ParticipantId, Price, Rounding,
    SwapDirection, SwapResult, PRICE_SCALE,
};
pub use crate::error::{DexError, Result};
pub use crate::math::CheckedArithmetic;
pub use crate::pool::{Pool, PoolEvent, PoolSnapshot};
pub use crate::traits::AssetLedger;
