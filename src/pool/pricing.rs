//! Pure pricing and share arithmetic.
//!
//! # Swap formula
//!
//! With `f` the fee in basis points:
//!
//! 1. `in_with_fee = amount_in × (10 000 − f)`
//! 2. `amount_out = reserve_out × in_with_fee / (reserve_in × 10 000 + in_with_fee)`
//!
//! One floor division at the end, with numerator and denominator both
//! carried in 256 bits.  The full input
//! joins the input reserve while only the priced share moves the curve, so
//! `k` grows by the fee on every trade.
//!
//! # Shares
//!
//! - First deposit: `⌊√(amount_a × amount_b)⌋`.
//! - Later deposits: `min(⌊amount_a × L / reserve_a⌋, ⌊amount_b × L / reserve_b⌋)`;
//!   whatever one side contributes beyond the other's ratio stays in the pool.
//! - Redemption: `⌊shares × reserve / L⌋` per asset, exact when `shares == L`.

use tracing::debug;

use crate::domain::{Amount, FeeTier, Liquidity, Rounding, SwapDirection, SwapResult, BPS_DENOMINATOR};
use crate::error::{DexError, Result};
use crate::math::{geometric_mean, CheckedArithmetic, U256};

/// Output of selling `amount_in` against `(reserve_in, reserve_out)`.
///
/// The result may be zero for a dust input; callers that execute the trade
/// reject that case.
///
/// # Errors
///
/// - [`DexError::InvalidAmount`] if `amount_in` is zero.
/// - [`DexError::EmptyPool`] if either reserve is zero.
/// - [`DexError::Overflow`] if `amount_in × (10 000 − fee) × reserve_out`
///   exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use dex_core::domain::{Amount, FeeTier};
/// use dex_core::pool::get_amount_out;
///
/// let out = get_amount_out(
///     Amount::new(10),
///     Amount::new(100),
///     Amount::new(200),
///     FeeTier::default(),
/// );
/// assert_eq!(out, Ok(Amount::new(18)));
/// ```
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(DexError::InvalidAmount("amount_in must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(DexError::EmptyPool);
    }

    let in_with_fee = U256::full_mul(amount_in.get(), u128::from(fee.priced_share().get()));
    let denominator = U256::full_mul(reserve_in.get(), BPS_DENOMINATOR)
        .checked_add(&in_with_fee)
        .ok_or(DexError::Overflow("swap denominator"))?;
    let numerator = in_with_fee
        .checked_mul_u128(reserve_out.get())
        .ok_or(DexError::Overflow("swap numerator"))?;

    // in_with_fee < denominator, so the quotient is below reserve_out.
    numerator
        .checked_div(&denominator)
        .and_then(|q| q.to_u128())
        .map(Amount::new)
        .ok_or(DexError::DivisionByZero)
}

/// Prices a swap in `direction` and packages it as a [`SwapResult`].
///
/// # Errors
///
/// Those of [`get_amount_out`], plus [`DexError::InvalidAmount`] when the
/// output rounds to zero.
pub fn quote_swap(
    direction: SwapDirection,
    amount_in: Amount,
    reserves: (Amount, Amount),
    fee: FeeTier,
) -> Result<SwapResult> {
    let (reserve_in, reserve_out) = match direction {
        SwapDirection::AToB => reserves,
        SwapDirection::BToA => (reserves.1, reserves.0),
    };
    let amount_out = get_amount_out(amount_in, reserve_in, reserve_out, fee)?;
    let fee_amount = fee.apply_to_amount(amount_in, Rounding::Down)?;
    debug!(%direction, %amount_in, %amount_out, fee = %fee_amount, "swap quoted");
    SwapResult::new(direction, amount_in, amount_out, fee_amount)
}

/// Shares minted for depositing `(amount_a, amount_b)` into a pool with
/// the given reserves and supply.
///
/// # Errors
///
/// - [`DexError::InvalidAmount`] if either amount is zero or the deposit is
///   too small to mint a single share.
/// - [`DexError::Overflow`] if a share count exceeds `u128`.
pub fn shares_for_deposit(
    amount_a: Amount,
    amount_b: Amount,
    reserves: (Amount, Amount),
    total: Liquidity,
) -> Result<Liquidity> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(DexError::InvalidAmount("both amounts must be positive"));
    }

    let shares = if total.is_zero() {
        Liquidity::new(geometric_mean(amount_a.get(), amount_b.get()))
    } else {
        let (reserve_a, reserve_b) = reserves;
        let by_a = total.safe_mul_div(amount_a.get(), reserve_a.get(), Rounding::Down)?;
        let by_b = total.safe_mul_div(amount_b.get(), reserve_b.get(), Rounding::Down)?;
        by_a.min(by_b)
    };

    if shares.is_zero() {
        return Err(DexError::InvalidAmount("deposit too small to mint shares"));
    }
    Ok(shares)
}

/// Assets paid out for redeeming `shares` from a pool with the given
/// reserves and supply.
///
/// # Errors
///
/// - [`DexError::InsufficientBalance`] if `shares` is zero or exceeds the
///   total supply.
pub fn amounts_for_shares(
    shares: Liquidity,
    reserves: (Amount, Amount),
    total: Liquidity,
) -> Result<(Amount, Amount)> {
    if shares.is_zero() {
        return Err(DexError::InsufficientBalance("shares must be positive"));
    }
    if shares > total {
        return Err(DexError::InsufficientBalance("shares exceed total supply"));
    }
    let (reserve_a, reserve_b) = reserves;
    let amount_a = reserve_a.safe_mul_div(shares.get(), total.get(), Rounding::Down)?;
    let amount_b = reserve_b.safe_mul_div(shares.get(), total.get(), Rounding::Down)?;
    Ok((amount_a, amount_b))
}
