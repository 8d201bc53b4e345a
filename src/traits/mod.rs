//! Collaborator abstractions.
//!
//! [`AssetLedger`] is the seam between the pool engine and wherever asset
//! balances actually live.

mod asset_ledger;

pub use asset_ledger::AssetLedger;
