//! Pool lifecycle events.
//!
//! Every committed state change appends one [`PoolEvent`] to the pool's
//! [`EventLog`].  Failed operations append nothing.  Observers read the
//! log through [`Pool::events`](super::Pool::events) or take ownership of
//! it with [`Pool::drain_events`](super::Pool::drain_events).

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Liquidity, ParticipantId, SwapDirection};

/// A committed pool state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PoolEvent {
    /// Assets deposited and shares minted.
    LiquidityAdded {
        /// Depositor and share recipient
        participant: ParticipantId,
        /// Asset A deposited
        amount_a: Amount,
        /// Asset B deposited
        amount_b: Amount,
        /// Shares minted
        shares: Liquidity,
    },

    /// Shares burned and assets paid out.
    LiquidityRemoved {
        /// Share holder and asset recipient
        participant: ParticipantId,
        /// Asset A paid out
        amount_a: Amount,
        /// Asset B paid out
        amount_b: Amount,
        /// Shares burned
        shares: Liquidity,
    },

    /// One asset exchanged for the other.
    Swap {
        /// Trader
        participant: ParticipantId,
        /// Which asset was sold
        direction: SwapDirection,
        /// Input paid into the pool, fee included
        amount_in: Amount,
        /// Output paid to the trader
        amount_out: Amount,
    },
}

impl PoolEvent {
    /// The participant that caused the event.
    #[must_use]
    pub const fn participant(&self) -> ParticipantId {
        match self {
            Self::LiquidityAdded { participant, .. }
            | Self::LiquidityRemoved { participant, .. }
            | Self::Swap { participant, .. } => *participant,
        }
    }
}

/// Append-only sequence of [`PoolEvent`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<PoolEvent>,
}

impl EventLog {
    /// An empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub(crate) fn push(&mut self, event: PoolEvent) {
        self.events.push(event);
    }

    /// Events in the order they were committed.
    #[must_use]
    pub fn as_slice(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&PoolEvent> {
        self.events.last()
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes and returns every buffered event.
    pub fn drain(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }
}
