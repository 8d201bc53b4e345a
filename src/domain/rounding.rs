//! Explicit rounding direction for integer division.

use serde::{Deserialize, Serialize};

/// Rounding direction for every division in the crate.
///
/// Pricing, redemption and fee reporting round [`Down`](Rounding::Down), so
/// any truncated remainder stays in the pool.
///
/// # Examples
///
/// ```
/// use dex_core::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Up.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
