//! The reserve ledger: the pool's only mutable state.
//!
//! [`ReserveLedger`] records reserves and share balances;
//! [`ReserveDelta`] is the single way to change them.

mod delta;
mod ledger;

pub use delta::ReserveDelta;
pub use ledger::ReserveLedger;
