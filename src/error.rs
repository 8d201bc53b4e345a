//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate returns [`DexError`].  A failed
//! operation never leaves a partial effect behind: reserves, share balances
//! and asset-ledger balances are exactly as they were before the call.

/// Errors produced by the pool engine and its collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DexError {
    /// A zero or otherwise unusable quantity was supplied, or the
    /// computed result of the operation rounds to nothing.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The caller tried to spend or redeem more than they own.
    ///
    /// This is also the access-control denial: redeeming another
    /// participant's shares surfaces as an insufficient balance.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(&'static str),

    /// An asset-ledger transfer was not authorised for the requested amount.
    #[error("insufficient allowance: {0}")]
    InsufficientAllowance(&'static str),

    /// A swap or quote was attempted against a pool with no reserves.
    #[error("pool has no reserves")]
    EmptyPool,

    /// A state transition would have violated a ledger invariant.
    ///
    /// Unreachable in correct operation; treated as fatal by callers.
    #[error("accounting error: {0}")]
    AccountingError(&'static str),

    /// An intermediate computation exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have gone below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The configured fee is outside the supported range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// The quoted output fell below the caller's minimum.
    #[error("output below requested minimum")]
    SlippageExceeded,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, DexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = DexError::InvalidAmount("amount_a must be positive");
        assert_eq!(err.to_string(), "invalid amount: amount_a must be positive");
    }

    #[test]
    fn display_unit_variants() {
        assert_eq!(DexError::EmptyPool.to_string(), "pool has no reserves");
        assert_eq!(DexError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            DexError::SlippageExceeded.to_string(),
            "output below requested minimum"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&DexError::EmptyPool);
    }

    #[test]
    fn copy_and_eq() {
        let a = DexError::Overflow("x");
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, DexError::Overflow("y"));
    }
}
