//! Configuration for a constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, FeeTier, ParticipantId};
use crate::error::DexError;

/// Identity the pool uses on both asset ledgers unless configured otherwise.
pub const DEFAULT_POOL_ACCOUNT: ParticipantId = ParticipantId::from_bytes([0xAA; 32]);

/// Immutable parameters of a [`Pool`](crate::pool::Pool).
///
/// # Validation
///
/// - The fee must be strictly below 100% (`10_000` bp); a full fee would
///   price every input at zero.
///
/// # Examples
///
/// ```
/// use dex_core::config::PoolConfig;
/// use dex_core::domain::{BasisPoints, FeeTier, ParticipantId};
///
/// let cfg = PoolConfig::new(
///     FeeTier::new(BasisPoints::new(30)),
///     ParticipantId::from_bytes([9u8; 32]),
/// );
/// assert!(cfg.is_ok());
///
/// let bad = PoolConfig::new(
///     FeeTier::new(BasisPoints::new(10_000)),
///     ParticipantId::from_bytes([9u8; 32]),
/// );
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    fee_tier: FeeTier,
    pool_account: ParticipantId,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidFee`] if the fee is 100% or more.
    pub fn new(fee_tier: FeeTier, pool_account: ParticipantId) -> Result<Self, DexError> {
        let config = Self {
            fee_tier,
            pool_account,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Configurations obtained through deserialization bypass [`new`](Self::new)
    /// and should be checked with this before use.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<(), DexError> {
        let bps = self.fee_tier.basis_points();
        if !bps.is_valid_percent() || bps == BasisPoints::MAX_PERCENT {
            return Err(DexError::InvalidFee("fee must be below 10000 basis points"));
        }
        Ok(())
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the account holding the pool's reserves on the asset ledgers.
    #[must_use]
    pub const fn pool_account(&self) -> ParticipantId {
        self.pool_account
    }
}

impl Default for PoolConfig {
    /// 30 bp fee and [`DEFAULT_POOL_ACCOUNT`].
    fn default() -> Self {
        Self {
            fee_tier: FeeTier::default(),
            pool_account: DEFAULT_POOL_ACCOUNT,
        }
    }
}
