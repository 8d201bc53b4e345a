//! Fixed-point exchange rate between the two pool assets.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::DexError;

/// Fixed-point scale of a [`Price`]: 18 decimal places.
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Units of asset B per unit of asset A, scaled by [`PRICE_SCALE`].
///
/// Integer-only so that price comparisons are exact: a deposit that keeps
/// the reserve ratio produces a bit-identical price.  [`Price::ZERO`] is the
/// sentinel reported for an empty pool.
///
/// # Examples
///
/// ```
/// use dex_core::domain::{Amount, Price, Rounding, PRICE_SCALE};
///
/// let p = Price::from_reserves(Amount::new(100), Amount::new(200), Rounding::Down)
///     .expect("non-zero base");
/// assert_eq!(p.raw(), 2 * PRICE_SCALE);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// Price of zero; also the empty-pool sentinel.
    pub const ZERO: Self = Self(0);

    /// Price ratio of 1:1.
    pub const ONE: Self = Self(PRICE_SCALE);

    /// Largest representable price.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps an already-scaled raw value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the scaled raw value.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Returns `true` for the zero price.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Computes `quote × PRICE_SCALE / base`.
    ///
    /// # Errors
    ///
    /// - [`DexError::DivisionByZero`] if `base` is zero.
    /// - [`DexError::Overflow`] if the scaled ratio exceeds `u128`.
    pub const fn from_reserves(
        base: Amount,
        quote: Amount,
        rounding: Rounding,
    ) -> crate::error::Result<Self> {
        if base.is_zero() {
            return Err(DexError::DivisionByZero);
        }
        match quote.checked_mul_div(PRICE_SCALE, base.get(), rounding) {
            Some(v) => Ok(Self(v.get())),
            None => Err(DexError::Overflow("price exceeds fixed-point range")),
        }
    }

    /// Splits the price into integer part and fractional part (in units of
    /// `1 / PRICE_SCALE`).
    #[must_use]
    pub const fn split(&self) -> (u128, u128) {
        (self.0 / PRICE_SCALE, self.0 % PRICE_SCALE)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int, frac) = self.split();
        write!(f, "{int}.{frac:018}")
    }
}
