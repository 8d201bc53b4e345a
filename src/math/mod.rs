//! Integer arithmetic for pool calculations.
//!
//! Everything here is exact integer math with an explicit rounding
//! direction:
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`div_round`] | `u128` division with [`Rounding`](crate::domain::Rounding) |
//! | [`mul_div`] | `a × b / d` through a 256-bit product |
//! | [`isqrt`] / [`geometric_mean`] | floor square root for initial share minting |
//! | [`CheckedArithmetic`] | `Result`-returning ops on quantity newtypes |
//! | [`Delta`] | signed change applied to an unsigned quantity |

mod checked;
mod rounding;
mod wide;

pub use checked::{CheckedArithmetic, Delta};
pub use rounding::div_round;
pub use wide::{geometric_mean, isqrt, mul_div, U256};
