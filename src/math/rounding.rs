//! Rounding helpers for integer division.
//!
//! [`div_round`] is the low-level `u128` building block behind
//! [`Amount::checked_div`](crate::domain::Amount::checked_div).
//!
//! # Convention
//!
//! Round in favour of the pool:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Redeemed reserves | [`Rounding::Down`] |
//! | Minted shares | [`Rounding::Down`] |
//! | Reported fee | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use dex_core::domain::Rounding;
//! use dex_core::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies d > 1, so q < MAX.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}
