//! The pool engine.
//!
//! | Item | Role |
//! |------|------|
//! | [`Pool`] | provisioning, redemption, swaps, queries |
//! | [`get_amount_out`] | pure constant-product pricing |
//! | [`PoolEvent`] / [`EventLog`] | committed state changes |
//! | [`PoolSnapshot`] | serializable public state |

mod engine;
mod events;
mod pricing;
mod snapshot;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use engine::Pool;
pub use events::{EventLog, PoolEvent};
pub use pricing::{amounts_for_shares, get_amount_out, quote_swap, shares_for_deposit};
pub use snapshot::PoolSnapshot;
