//! Reserve and share bookkeeping.

use std::collections::HashMap;

use tracing::warn;

use super::ReserveDelta;
use crate::domain::{Amount, Asset, Liquidity, ParticipantId, Price, Rounding};
use crate::error::{DexError, Result};
use crate::math::{CheckedArithmetic, U256};

/// The pool's book of record: both reserves, the total share supply, and
/// every participant's share balance.
///
/// # Invariants
///
/// Hold after construction and after every successful
/// [`apply_delta`](Self::apply_delta):
///
/// - `reserve_a == 0 ⟺ reserve_b == 0 ⟺ total_liquidity == 0`
/// - `Σ liquidity_of(p) == total_liquidity`
/// - `reserve_a × reserve_b` never decreases across a swap delta
///
/// A participant whose balance reaches zero stays in the book with a zero
/// balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveLedger {
    reserve_a: Amount,
    reserve_b: Amount,
    total_liquidity: Liquidity,
    shares: HashMap<ParticipantId, Liquidity>,
}

impl ReserveLedger {
    /// An empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn get_reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Reserve of a single asset.
    pub const fn reserve(&self, asset: Asset) -> Amount {
        match asset {
            Asset::A => self.reserve_a,
            Asset::B => self.reserve_b,
        }
    }

    /// Marginal price of A in units of B, `reserve_b × 10^18 / reserve_a`,
    /// rounded down.
    ///
    /// Returns [`Price::ZERO`] for an empty pool and saturates at
    /// [`Price::MAX`] when the ratio exceeds the fixed-point range.
    #[must_use]
    pub const fn get_price(&self) -> Price {
        if self.reserve_a.is_zero() {
            return Price::ZERO;
        }
        match Price::from_reserves(self.reserve_a, self.reserve_b, Rounding::Down) {
            Ok(p) => p,
            Err(_) => Price::MAX,
        }
    }

    /// Outstanding share supply.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    /// Share balance of `participant`; zero if they never held any.
    #[must_use]
    pub fn liquidity_of(&self, participant: &ParticipantId) -> Liquidity {
        self.shares.get(participant).copied().unwrap_or(Liquidity::ZERO)
    }

    /// Every participant the ledger has recorded, including zero balances.
    pub fn holders(&self) -> impl Iterator<Item = (&ParticipantId, Liquidity)> + '_ {
        self.shares.iter().map(|(p, l)| (p, *l))
    }

    /// `reserve_a × reserve_b`, exact.
    #[must_use]
    pub const fn constant_product(&self) -> U256 {
        U256::full_mul(self.reserve_a.get(), self.reserve_b.get())
    }

    /// `true` if the pool holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_liquidity.is_zero()
    }

    /// Checks `delta` against the current state without applying it.
    ///
    /// # Errors
    ///
    /// The same as [`apply_delta`](Self::apply_delta).
    pub fn validate_delta(&self, delta: &ReserveDelta) -> Result<()> {
        self.stage(delta).map(|_| ())
    }

    /// Applies `delta` atomically.
    ///
    /// All new values are computed first with checked arithmetic and the
    /// invariants are verified against them; state is written only if
    /// every check passes.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AccountingError`] if any value would leave its
    /// range or any invariant would break.  The ledger is unchanged.
    pub fn apply_delta(&mut self, delta: &ReserveDelta) -> Result<()> {
        let staged = self.stage(delta).inspect_err(|err| {
            warn!(error = %err, ?delta, "reserve delta rejected");
        })?;

        self.reserve_a = staged.reserve_a;
        self.reserve_b = staged.reserve_b;
        self.total_liquidity = staged.total_liquidity;
        if let Some((participant, balance)) = staged.balance {
            self.shares.insert(participant, balance);
        }
        Ok(())
    }

    fn stage(&self, delta: &ReserveDelta) -> Result<Staged> {
        let reserve_a = self
            .reserve_a
            .apply(delta.reserve_a())
            .map_err(|_| DexError::AccountingError("reserve A out of range"))?;
        let reserve_b = self
            .reserve_b
            .apply(delta.reserve_b())
            .map_err(|_| DexError::AccountingError("reserve B out of range"))?;

        if delta.is_swap() {
            let after = U256::full_mul(reserve_a.get(), reserve_b.get());
            if after < self.constant_product() {
                return Err(DexError::AccountingError("swap decreased constant product"));
            }
        }

        let (total_liquidity, balance) = match delta.liquidity() {
            Some((participant, change)) => {
                let total = self
                    .total_liquidity
                    .apply(change)
                    .map_err(|_| DexError::AccountingError("total liquidity out of range"))?;
                let balance = self
                    .liquidity_of(&participant)
                    .apply(change)
                    .map_err(|_| DexError::AccountingError("share balance out of range"))?;
                if balance > total {
                    return Err(DexError::AccountingError("share balance exceeds total"));
                }
                (total, Some((participant, balance)))
            }
            None => (self.total_liquidity, None),
        };

        let a_empty = reserve_a.is_zero();
        if a_empty != reserve_b.is_zero() || a_empty != total_liquidity.is_zero() {
            return Err(DexError::AccountingError(
                "reserves and liquidity must be empty together",
            ));
        }

        Ok(Staged {
            reserve_a,
            reserve_b,
            total_liquidity,
            balance,
        })
    }
}

struct Staged {
    reserve_a: Amount,
    reserve_b: Amount,
    total_liquidity: Liquidity,
    balance: Option<(ParticipantId, Liquidity)>,
}
