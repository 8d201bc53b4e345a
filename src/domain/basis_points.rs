//! Basis-point representation for fee rates.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::DexError;

/// Denominator that represents 100%.
pub(crate) const BPS_DENOMINATOR: u128 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// # Examples
///
/// ```
/// use dex_core::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert_eq!(bp.complement().get(), 9_970);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR as u32);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 as u128 <= BPS_DENOMINATOR
    }

    /// Returns `10_000 − self`, saturating at zero.
    ///
    /// For a fee rate this is the share of the input that is priced.
    pub const fn complement(&self) -> Self {
        Self((BPS_DENOMINATOR as u32).saturating_sub(self.0))
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the result exceeds `u128`.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        match amount.checked_mul_div(self.0 as u128, BPS_DENOMINATOR, rounding) {
            Some(v) => Ok(v),
            None => Err(DexError::Overflow("basis points apply overflow")),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_percent_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn complement() {
        assert_eq!(BasisPoints::new(30).complement(), BasisPoints::new(9_970));
        assert_eq!(BasisPoints::ZERO.complement(), BasisPoints::MAX_PERCENT);
        assert_eq!(BasisPoints::new(20_000).complement(), BasisPoints::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }

    #[test]
    fn apply_round_down() {
        let Ok(result) = BasisPoints::new(30).apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(3_000));
    }

    #[test]
    fn apply_remainder_rounding() {
        // 30bp of 1 = 0.003
        let bp = BasisPoints::new(30);
        let Ok(down) = bp.apply(Amount::new(1), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = bp.apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::ZERO);
        assert_eq!(up, Amount::new(1));
    }

    #[test]
    fn apply_large_amount_uses_wide_product() {
        // MAX * 30 overflows u128, the quotient does not.
        let Ok(r) = BasisPoints::new(30).apply(Amount::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert!(r < Amount::MAX);
    }

    #[test]
    fn apply_overflow() {
        let result = BasisPoints::new(u32::MAX).apply(Amount::MAX, Rounding::Down);
        assert!(matches!(result, Err(DexError::Overflow(_))));
    }
}
