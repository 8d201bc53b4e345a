//! Checked arithmetic for the engine's quantity types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning inherent methods of
//! [`Amount`] and [`Liquidity`] into [`Result`](crate::error::Result) so
//! that the pool can chain them with `?`.  [`Delta`] describes a signed
//! change to one of those quantities without leaving unsigned space.
//!
//! # Examples
//!
//! ```
//! use dex_core::domain::{Amount, Rounding};
//! use dex_core::math::{CheckedArithmetic, Delta};
//!
//! let reserve = Amount::new(1_000);
//! let grown = reserve.apply(Delta::Increase(Amount::new(10)));
//! assert_eq!(grown, Ok(Amount::new(1_010)));
//!
//! let share = reserve.safe_mul_div(25, 100, Rounding::Down);
//! assert_eq!(share, Ok(Amount::new(250)));
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::{DexError, Result};
use crate::math::mul_div;

/// A signed change to an unsigned quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delta<T> {
    /// Add the wrapped quantity.
    Increase(T),
    /// Subtract the wrapped quantity.
    Decrease(T),
}

/// Fallible arithmetic for quantity newtypes.
///
/// # Contract
///
/// - No panics: every error condition produces `Err`.
/// - No saturation: errors propagate to the caller.
pub trait CheckedArithmetic: Sized + Copy {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the sum is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;

    /// `self × numerator / denominator` through a 256-bit product.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::DivisionByZero`] on a zero denominator and
    /// [`DexError::Overflow`] if the quotient is not representable.
    fn safe_mul_div(&self, numerator: u128, denominator: u128, rounding: Rounding)
        -> Result<Self>;

    /// Applies a [`Delta`].
    ///
    /// # Errors
    ///
    /// Propagates [`safe_add`](Self::safe_add) or
    /// [`safe_sub`](Self::safe_sub) failures.
    fn apply(&self, delta: Delta<Self>) -> Result<Self> {
        match delta {
            Delta::Increase(v) => self.safe_add(&v),
            Delta::Decrease(v) => self.safe_sub(&v),
        }
    }
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(DexError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(DexError::Underflow("amount subtraction underflow"))
    }

    fn safe_mul_div(&self, numerator: u128, denominator: u128, rounding: Rounding) -> Result<Self> {
        if denominator == 0 {
            return Err(DexError::DivisionByZero);
        }
        self.checked_mul_div(numerator, denominator, rounding)
            .ok_or(DexError::Overflow("amount mul_div overflow"))
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(DexError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(DexError::Underflow("liquidity subtraction underflow"))
    }

    fn safe_mul_div(&self, numerator: u128, denominator: u128, rounding: Rounding) -> Result<Self> {
        if denominator == 0 {
            return Err(DexError::DivisionByZero);
        }
        mul_div(self.get(), numerator, denominator, rounding)
            .map(Liquidity::new)
            .ok_or(DexError::Overflow("liquidity mul_div overflow"))
    }
}
