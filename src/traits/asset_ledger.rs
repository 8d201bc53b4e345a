//! Fungible asset ledger abstraction.
//!
//! The pool never holds balances itself.  Each of its two assets lives on
//! an external ledger reached through [`AssetLedger`]; the pool's holdings
//! are the balance of its own account there.
//!
//! # Atomicity
//!
//! Every mutating method either succeeds completely or returns an error
//! with no effect.  The pool relies on this to unwind a multi-transfer
//! operation when a later leg fails.
//!
//! # No callbacks
//!
//! Implementations receive `&mut self` only and have no path back into the
//! pool, so an operation cannot be re-entered while it is in progress.

use crate::domain::{Amount, ParticipantId};
use crate::error::Result;

/// Balances and spending allowances for a single fungible asset.
pub trait AssetLedger {
    /// Current balance of `owner`.
    fn balance_of(&self, owner: &ParticipantId) -> Amount;

    /// Amount `spender` may still move out of `owner`'s balance.
    fn allowance(&self, owner: &ParticipantId, spender: &ParticipantId) -> Amount;

    /// Sets the allowance of `spender` over `owner`'s balance, replacing
    /// any previous value.
    ///
    /// # Errors
    ///
    /// Implementation defined; the in-memory ledger never fails.
    fn approve(&mut self, owner: ParticipantId, spender: ParticipantId, amount: Amount)
        -> Result<()>;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientBalance`](crate::error::DexError::InsufficientBalance)
    /// if `from` holds less than `amount`.
    fn transfer(&mut self, from: ParticipantId, to: ParticipantId, amount: Amount) -> Result<()>;

    /// Moves `amount` from `owner` to `recipient` on behalf of `spender`,
    /// consuming allowance.
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientAllowance`](crate::error::DexError::InsufficientAllowance)
    ///   if `spender` is not authorised for `amount`.
    /// - [`DexError::InsufficientBalance`](crate::error::DexError::InsufficientBalance)
    ///   if `owner` holds less than `amount`.
    fn transfer_from(
        &mut self,
        spender: ParticipantId,
        owner: ParticipantId,
        recipient: ParticipantId,
        amount: Amount,
    ) -> Result<()>;
}
