//! Outcome of a swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Price, Rounding, SwapDirection};
use crate::error::DexError;

/// The outcome of an executed or quoted swap.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`.
///
/// # Examples
///
/// ```
/// use dex_core::domain::{Amount, SwapDirection, SwapResult};
///
/// let result = SwapResult::new(
///     SwapDirection::AToB,
///     Amount::new(1_000),
///     Amount::new(990),
///     Amount::new(3),
/// );
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidAmount`] if either amount is zero or the
    /// fee is not strictly below the input.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(DexError::InvalidAmount("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(DexError::InvalidAmount("swap output rounds to zero"));
        }
        if fee.get() >= amount_in.get() {
            return Err(DexError::InvalidAmount("fee must be less than amount_in"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the portion of the input retained as fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Realised rate `amount_out / amount_in`, fixed-point scaled.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the ratio exceeds the fixed-point range.
    pub const fn effective_price(&self, rounding: Rounding) -> crate::error::Result<Price> {
        Price::from_reserves(self.amount_in, self.amount_out, rounding)
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({}, in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
