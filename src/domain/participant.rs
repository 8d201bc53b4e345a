//! Opaque participant identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an account on the asset ledgers and in the share registry.
///
/// Wraps a fixed 32-byte value, wide enough for a public key or address
/// hash on any settlement substrate.  All byte sequences are valid.
///
/// # Examples
///
/// ```
/// use dex_core::domain::ParticipantId;
///
/// let alice = ParticipantId::from_bytes([1u8; 32]);
/// assert_eq!(alice.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId([u8; 32]);

impl ParticipantId {
    /// Creates an identity from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    /// Short hex form: the first four bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}
