//! Serializable view of pool state.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, FeeTier, Liquidity, Price};

/// Point-in-time copy of a pool's public state.
///
/// Holds no participant balances; those are queried individually with
/// [`Pool::liquidity_of`](super::Pool::liquidity_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Asset A held by the pool.
    pub reserve_a: Amount,
    /// Asset B held by the pool.
    pub reserve_b: Amount,
    /// Outstanding shares.
    pub total_liquidity: Liquidity,
    /// Marginal price of A in B.
    pub price: Price,
    /// Swap fee.
    pub fee_tier: FeeTier,
    /// Lifetime fees retained on A inputs.
    pub accumulated_fees_a: Amount,
    /// Lifetime fees retained on B inputs.
    pub accumulated_fees_b: Amount,
}

impl PoolSnapshot {
    /// `true` if the pool held no liquidity at snapshot time.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_liquidity.is_zero()
    }
}
