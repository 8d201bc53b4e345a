//! Value types used throughout the pool engine.
//!
//! Quantities are `u128` newtypes with checked arithmetic; prices are
//! 18-decimal fixed-point integers.  No floating point appears anywhere in
//! pricing or accounting.

mod amount;
mod basis_points;
mod direction;
mod fee_tier;
mod liquidity;
mod participant;
mod price;
mod rounding;
mod swap_result;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub(crate) use basis_points::BPS_DENOMINATOR;
pub use direction::{Asset, SwapDirection};
pub use fee_tier::FeeTier;
pub use liquidity::Liquidity;
pub use participant::ParticipantId;
pub use price::{Price, PRICE_SCALE};
pub use rounding::Rounding;
pub use swap_result::SwapResult;
