//! State transitions for the reserve ledger.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Liquidity, ParticipantId, SwapDirection};
use crate::math::Delta;

/// One atomic change to a [`ReserveLedger`](super::ReserveLedger): both
/// reserves, and optionally the share balance of a single participant
/// together with the total supply.
///
/// The constructors build the only three shapes the pool produces.
///
/// # Examples
///
/// ```
/// use dex_core::domain::{Amount, SwapDirection};
/// use dex_core::math::Delta;
/// use dex_core::reserves::ReserveDelta;
///
/// let d = ReserveDelta::swap(SwapDirection::AToB, Amount::new(10), Amount::new(18));
/// assert_eq!(d.reserve_a(), Delta::Increase(Amount::new(10)));
/// assert_eq!(d.reserve_b(), Delta::Decrease(Amount::new(18)));
/// assert!(d.liquidity().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveDelta {
    reserve_a: Delta<Amount>,
    reserve_b: Delta<Amount>,
    liquidity: Option<(ParticipantId, Delta<Liquidity>)>,
}

impl ReserveDelta {
    const fn new(
        reserve_a: Delta<Amount>,
        reserve_b: Delta<Amount>,
        liquidity: Option<(ParticipantId, Delta<Liquidity>)>,
    ) -> Self {
        Self {
            reserve_a,
            reserve_b,
            liquidity,
        }
    }

    /// Input reserve grows by `amount_in`, output reserve shrinks by
    /// `amount_out`; shares are untouched.
    pub const fn swap(direction: SwapDirection, amount_in: Amount, amount_out: Amount) -> Self {
        let (reserve_a, reserve_b) = match direction {
            SwapDirection::AToB => (Delta::Increase(amount_in), Delta::Decrease(amount_out)),
            SwapDirection::BToA => (Delta::Decrease(amount_out), Delta::Increase(amount_in)),
        };
        Self::new(reserve_a, reserve_b, None)
    }

    /// Deposit of both assets minting `shares` to `participant`.
    pub const fn mint(
        participant: ParticipantId,
        amount_a: Amount,
        amount_b: Amount,
        shares: Liquidity,
    ) -> Self {
        Self::new(
            Delta::Increase(amount_a),
            Delta::Increase(amount_b),
            Some((participant, Delta::Increase(shares))),
        )
    }

    /// Redemption of `shares` held by `participant` for both assets.
    pub const fn burn(
        participant: ParticipantId,
        amount_a: Amount,
        amount_b: Amount,
        shares: Liquidity,
    ) -> Self {
        Self::new(
            Delta::Decrease(amount_a),
            Delta::Decrease(amount_b),
            Some((participant, Delta::Decrease(shares))),
        )
    }

    /// Change to reserve A.
    #[must_use]
    pub const fn reserve_a(&self) -> Delta<Amount> {
        self.reserve_a
    }

    /// Change to reserve B.
    #[must_use]
    pub const fn reserve_b(&self) -> Delta<Amount> {
        self.reserve_b
    }

    /// Change to one participant's shares and the total supply, if any.
    #[must_use]
    pub const fn liquidity(&self) -> Option<(ParticipantId, Delta<Liquidity>)> {
        self.liquidity
    }

    /// `true` if the delta leaves share balances untouched.
    #[must_use]
    pub const fn is_swap(&self) -> bool {
        self.liquidity.is_none()
    }
}
