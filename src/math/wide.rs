//! 256-bit intermediates for `u128` products.
//!
//! Reserve and share formulas multiply two `u128` quantities before
//! dividing.  With 18-decimal assets those products routinely exceed
//! `u128::MAX` (`1000e18 × 2000e18 ≈ 2e42`), so they are carried in a
//! [`U256`] and only the final quotient is narrowed back to `u128`.

use crate::domain::Rounding;

const LOW_MASK: u128 = u64::MAX as u128;

/// Unsigned 256-bit integer, used only as a product/dividend.
///
/// Fields are ordered high-then-low so the derived ordering is numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct U256 {
    hi: u128,
    lo: u128,
}

impl U256 {
    /// Zero.
    pub const ZERO: Self = Self { hi: 0, lo: 0 };

    /// Widens a `u128`.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self { hi: 0, lo: value }
    }

    /// High 128 bits.
    #[must_use]
    pub const fn hi(&self) -> u128 {
        self.hi
    }

    /// Low 128 bits.
    #[must_use]
    pub const fn lo(&self) -> u128 {
        self.lo
    }

    /// Exact product of two `u128` values.
    #[must_use]
    pub const fn full_mul(a: u128, b: u128) -> Self {
        let (a1, a0) = (a >> 64, a & LOW_MASK);
        let (b1, b0) = (b >> 64, b & LOW_MASK);

        // Every partial product of two 64-bit halves fits in u128.
        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        // mid < 3 · 2^64, no overflow.
        let mid = (p00 >> 64) + (p01 & LOW_MASK) + (p10 & LOW_MASK);
        let lo = (p00 & LOW_MASK) | (mid << 64);
        let hi = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);
        Self { hi, lo }
    }

    /// `self ≤ other`, usable in const context.
    #[must_use]
    pub const fn le(&self, other: &Self) -> bool {
        self.hi < other.hi || (self.hi == other.hi && self.lo <= other.lo)
    }

    /// Narrows to `u128` if the high half is empty.
    #[must_use]
    pub const fn to_u128(&self) -> Option<u128> {
        if self.hi == 0 {
            Some(self.lo)
        } else {
            None
        }
    }

    /// Quotient and remainder of division by a `u128`.
    ///
    /// Returns `None` if `divisor` is zero or the quotient does not fit in
    /// `u128` (equivalently, `hi ≥ divisor`).
    #[must_use]
    pub const fn div_rem(&self, divisor: u128) -> Option<(u128, u128)> {
        if divisor == 0 || self.hi >= divisor {
            return None;
        }
        if self.hi == 0 {
            return Some((self.lo / divisor, self.lo % divisor));
        }

        // Restoring long division over the low word; rem < divisor holds
        // at the top of every iteration.
        let mut rem = self.hi;
        let mut quotient: u128 = 0;
        let mut bit = 128;
        while bit > 0 {
            bit -= 1;
            let carry = rem >> 127;
            rem = (rem << 1) | ((self.lo >> bit) & 1);
            quotient <<= 1;
            if carry == 1 || rem >= divisor {
                rem = rem.wrapping_sub(divisor);
                quotient |= 1;
            }
        }
        Some((quotient, rem))
    }
}

impl U256 {
    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        let (lo, carry) = self.lo.overflowing_add(other.lo);
        let hi = match self.hi.checked_add(other.hi) {
            Some(hi) => hi,
            None => return None,
        };
        match hi.checked_add(carry as u128) {
            Some(hi) => Some(Self { hi, lo }),
            None => None,
        }
    }

    /// Checked multiplication by a `u128`.
    #[must_use]
    pub const fn checked_mul_u128(&self, rhs: u128) -> Option<Self> {
        let low = Self::full_mul(self.lo, rhs);
        let high = Self::full_mul(self.hi, rhs);
        if high.hi != 0 {
            return None;
        }
        match low.hi.checked_add(high.lo) {
            Some(hi) => Some(Self { hi, lo: low.lo }),
            None => None,
        }
    }

    /// Floor division by another `U256`; `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.hi == 0 && divisor.lo == 0 {
            return None;
        }
        let mut rem = Self::ZERO;
        let mut quotient = Self::ZERO;
        let mut bit: u32 = 256;
        while bit > 0 {
            bit -= 1;
            let (shifted, carry) = rem.shl1();
            rem = Self {
                hi: shifted.hi,
                lo: shifted.lo | self.bit(bit),
            };
            quotient = quotient.shl1().0;
            if carry || divisor.le(&rem) {
                rem = rem.wrapping_sub(divisor);
                quotient.lo |= 1;
            }
        }
        Some(quotient)
    }

    const fn shl1(&self) -> (Self, bool) {
        let carry = self.hi >> 127 == 1;
        let shifted = Self {
            hi: (self.hi << 1) | (self.lo >> 127),
            lo: self.lo << 1,
        };
        (shifted, carry)
    }

    const fn bit(&self, index: u32) -> u128 {
        if index >= 128 {
            (self.hi >> (index - 128)) & 1
        } else {
            (self.lo >> index) & 1
        }
    }

    const fn wrapping_sub(&self, other: &Self) -> Self {
        let (lo, borrow) = self.lo.overflowing_sub(other.lo);
        let hi = self.hi.wrapping_sub(other.hi).wrapping_sub(borrow as u128);
        Self { hi, lo }
    }
}

/// Computes `a × b / denominator` exactly, rounding in the given direction.
///
/// Returns `None` if `denominator` is zero or the result exceeds `u128`.
///
/// # Examples
///
/// ```
/// use dex_core::domain::Rounding;
/// use dex_core::math::mul_div;
///
/// let e18 = 1_000_000_000_000_000_000u128;
/// assert_eq!(mul_div(1_000 * e18, 2_000 * e18, 4 * e18, Rounding::Down), Some(500_000 * e18));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Some(4));
/// ```
#[must_use]
pub const fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    let (q, r) = match U256::full_mul(a, b).div_rem(denominator) {
        Some(qr) => qr,
        None => return None,
    };
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up if r != 0 => q.checked_add(1),
        Rounding::Up => Some(q),
    }
}

/// Floor square root of a 256-bit value.
///
/// The root of any `U256` fits in `u128`.
#[must_use]
pub const fn isqrt(value: U256) -> u128 {
    let mut lo: u128 = 0;
    let mut hi: u128 = u128::MAX;
    while lo < hi {
        // Upper midpoint so the loop always makes progress.
        let span = hi - lo;
        let mid = lo + span / 2 + span % 2;
        if U256::full_mul(mid, mid).le(&value) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Floor of `√(a × b)`, the geometric mean of two quantities.
#[must_use]
pub const fn geometric_mean(a: u128, b: u128) -> u128 {
    isqrt(U256::full_mul(a, b))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn full_mul_small() {
        assert_eq!(U256::full_mul(6, 7), U256::from_u128(42));
        assert_eq!(U256::full_mul(0, u128::MAX), U256::ZERO);
    }

    #[test]
    fn full_mul_carries_into_high_word() {
        // 2^64 · 2^64 = 2^128
        let p = U256::full_mul(1u128 << 64, 1u128 << 64);
        assert_eq!(p.hi(), 1);
        assert_eq!(p.lo(), 0);
    }

    #[test]
    fn full_mul_max() {
        // (2^128 − 1)^2 = 2^256 − 2^129 + 1
        let p = U256::full_mul(u128::MAX, u128::MAX);
        assert_eq!(p.hi(), u128::MAX - 1);
        assert_eq!(p.lo(), 1);
    }

    #[test]
    fn ordering_is_numeric() {
        let small = U256::from_u128(u128::MAX);
        let big = U256::full_mul(1u128 << 64, 1u128 << 64);
        assert!(small < big);
        assert!(small.le(&big));
        assert!(!big.le(&small));
        assert!(big.le(&big));
    }

    #[test]
    fn to_u128_narrowing() {
        assert_eq!(U256::from_u128(5).to_u128(), Some(5));
        assert_eq!(U256::full_mul(u128::MAX, 2).to_u128(), None);
    }

    #[test]
    fn div_rem_wide() {
        let p = U256::full_mul(u128::MAX, u128::MAX);
        assert_eq!(p.div_rem(u128::MAX), Some((u128::MAX, 0)));
        let p = U256::full_mul(1u128 << 100, 1u128 << 20);
        assert_eq!(p.div_rem(1u128 << 30), Some((1u128 << 90, 0)));
        // 2^128 = 3 · (2^128 − 1)/3 + 1
        let p = U256::full_mul(1u128 << 64, 1u128 << 64);
        assert_eq!(p.div_rem(3), Some((u128::MAX / 3, 1)));
    }

    #[test]
    fn div_rem_rejects_zero_and_overflow() {
        assert_eq!(U256::from_u128(1).div_rem(0), None);
        assert_eq!(U256::full_mul(1u128 << 64, 1u128 << 64).div_rem(1), None);
    }

    #[test]
    fn mul_div_eighteen_decimals() {
        assert_eq!(
            mul_div(2_000 * E18, E18, 1_000 * E18, Rounding::Down),
            Some(2 * E18)
        );
        assert_eq!(
            mul_div(1_000 * E18, 2_000 * E18, 1_000 * E18, Rounding::Down),
            Some(2_000 * E18)
        );
    }

    #[test]
    fn mul_div_rounding_up_at_max_overflows() {
        assert_eq!(mul_div(u128::MAX, 1, 1, Rounding::Up), Some(u128::MAX));
        let Some(q) = mul_div(u128::MAX, u128::MAX - 1, u128::MAX, Rounding::Down) else {
            panic!("expected Some");
        };
        assert_eq!(q, u128::MAX - 1);
    }

    #[test]
    fn isqrt_small_values() {
        assert_eq!(isqrt(U256::ZERO), 0);
        assert_eq!(isqrt(U256::from_u128(1)), 1);
        assert_eq!(isqrt(U256::from_u128(15)), 3);
        assert_eq!(isqrt(U256::from_u128(16)), 4);
        assert_eq!(isqrt(U256::from_u128(17)), 4);
    }

    #[test]
    fn isqrt_of_perfect_squares() {
        for x in [1u128, 7, 1 << 63, E18, u64::MAX as u128, u128::MAX] {
            assert_eq!(isqrt(U256::full_mul(x, x)), x);
        }
    }

    #[test]
    fn geometric_mean_eighteen_decimals() {
        // √(1000e18 · 2000e18) = √2 · 1e21
        assert_eq!(
            geometric_mean(1_000 * E18, 2_000 * E18),
            1_414_213_562_373_095_048_801
        );
        assert_eq!(geometric_mean(100, 200), 141);
        assert_eq!(geometric_mean(1, 2), 1);
    }

    #[test]
    fn checked_add_carries_into_high_word() {
        let Some(sum) = U256::from_u128(u128::MAX).checked_add(&U256::from_u128(1)) else {
            panic!("expected Some");
        };
        assert_eq!((sum.hi(), sum.lo()), (1, 0));
        let max = U256::full_mul(u128::MAX, u128::MAX);
        assert!(max.checked_add(&max).is_none());
    }

    #[test]
    fn checked_mul_u128_widens_and_overflows() {
        let Some(p) = U256::from_u128(u128::MAX).checked_mul_u128(3) else {
            panic!("expected Some");
        };
        assert_eq!(p, U256::full_mul(u128::MAX, 3));
        assert!(U256::full_mul(u128::MAX, 2).checked_mul_u128(u128::MAX).is_none());
    }

    #[test]
    fn checked_div_by_narrow_divisor() {
        let n = U256::full_mul(1_000 * E18, 2_000 * E18);
        assert_eq!(n.checked_div(&U256::from_u128(2_000 * E18)), Some(U256::from_u128(1_000 * E18)));
        assert_eq!(U256::from_u128(10).checked_div(&U256::from_u128(3)), Some(U256::from_u128(3)));
        assert_eq!(n.checked_div(&U256::ZERO), None);
    }

    #[test]
    fn checked_div_by_wide_divisor() {
        let n = U256::full_mul(u128::MAX, u128::MAX);
        let d = U256::full_mul(u128::MAX, 3);
        assert_eq!(n.checked_div(&d), Some(U256::from_u128(u128::MAX / 3)));
        // divisor above 2^255 exercises the shifted-out carry
        assert_eq!(n.checked_div(&n), Some(U256::from_u128(1)));
        assert_eq!(d.checked_div(&n), Some(U256::ZERO));
    }
}
