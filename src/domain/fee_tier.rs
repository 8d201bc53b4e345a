//! Swap fee rate built on [`BasisPoints`].

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints, Rounding};

/// The proportional fee taken from every swap input.
///
/// The fee never leaves the pool: the full input is added to the reserve
/// while only the complement is priced, so the retained portion raises
/// `reserve_a × reserve_b` and with it the value of every share.
///
/// # Examples
///
/// ```
/// use dex_core::domain::FeeTier;
///
/// let tier = FeeTier::default();
/// assert_eq!(tier, FeeTier::TIER_0_30_PERCENT);
/// assert_eq!(tier.basis_points().get(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp), the canonical constant-product rate.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    ///
    /// Range checking happens in [`PoolConfig`](crate::config::PoolConfig).
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the priced share of an input, in basis points
    /// (`10_000 − fee_bps`).
    #[must_use]
    pub const fn priced_share(&self) -> BasisPoints {
        self.0.complement()
    }

    /// Computes the fee portion of `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`](crate::error::DexError::Overflow) if the
    /// result exceeds `u128`.
    pub const fn apply_to_amount(
        &self,
        amount: Amount,
        rounding: Rounding,
    ) -> crate::error::Result<Amount> {
        self.0.apply(amount, rounding)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
