//! Hash-map backed [`AssetLedger`].

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Amount, ParticipantId};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// An in-process fungible asset with balances and allowances.
///
/// An allowance of [`Amount::MAX`] is treated as unlimited and is not
/// decremented by [`transfer_from`](AssetLedger::transfer_from).
///
/// # Examples
///
/// ```
/// use dex_core::assets::InMemoryAssetLedger;
/// use dex_core::domain::{Amount, ParticipantId};
/// use dex_core::traits::AssetLedger;
///
/// let alice = ParticipantId::from_bytes([1u8; 32]);
/// let bob = ParticipantId::from_bytes([2u8; 32]);
///
/// let mut token = InMemoryAssetLedger::new("TKA");
/// token.mint(alice, Amount::new(1_000)).expect("mint");
/// token.transfer(alice, bob, Amount::new(400)).expect("transfer");
/// assert_eq!(token.balance_of(&bob), Amount::new(400));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetLedger {
    symbol: String,
    total_supply: Amount,
    balances: HashMap<ParticipantId, Amount>,
    allowances: HashMap<(ParticipantId, ParticipantId), Amount>,
}

impl InMemoryAssetLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Ticker used in log output.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Sum of all balances.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Creates `amount` new units in `to`'s balance.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the total supply would exceed
    /// `u128::MAX`.
    pub fn mint(&mut self, to: ParticipantId, amount: Amount) -> Result<()> {
        let supply = self.total_supply.safe_add(&amount)?;
        let balance = self.balance_of(&to).safe_add(&amount)?;
        self.total_supply = supply;
        self.balances.insert(to, balance);
        trace!(symbol = %self.symbol, %to, %amount, "mint");
        Ok(())
    }

    fn move_balance(&mut self, from: ParticipantId, to: ParticipantId, amount: Amount) -> Result<()> {
        let from_balance = self
            .balance_of(&from)
            .safe_sub(&amount)
            .map_err(|_| DexError::InsufficientBalance("transfer exceeds balance"))?;
        if from != to {
            let to_balance = self.balance_of(&to).safe_add(&amount)?;
            self.balances.insert(from, from_balance);
            self.balances.insert(to, to_balance);
        }
        trace!(symbol = %self.symbol, %from, %to, %amount, "transfer");
        Ok(())
    }
}

impl AssetLedger for InMemoryAssetLedger {
    fn balance_of(&self, owner: &ParticipantId) -> Amount {
        self.balances.get(owner).copied().unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, owner: &ParticipantId, spender: &ParticipantId) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn approve(&mut self, owner: ParticipantId, spender: ParticipantId, amount: Amount) -> Result<()> {
        self.allowances.insert((owner, spender), amount);
        trace!(symbol = %self.symbol, %owner, %spender, %amount, "approve");
        Ok(())
    }

    fn transfer(&mut self, from: ParticipantId, to: ParticipantId, amount: Amount) -> Result<()> {
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: ParticipantId,
        owner: ParticipantId,
        recipient: ParticipantId,
        amount: Amount,
    ) -> Result<()> {
        let allowance = self.allowance(&owner, &spender);
        let remaining = allowance
            .safe_sub(&amount)
            .map_err(|_| DexError::InsufficientAllowance("transfer exceeds allowance"))?;
        self.move_balance(owner, recipient, amount)?;
        if allowance != Amount::MAX {
            self.allowances.insert((owner, spender), remaining);
        }
        Ok(())
    }
}
