//! Unified error types for the exchange core.
//!
//! Every fallible operation in the crate returns [`DexError`], so callers
//! (a UI layer, an indexer, a test harness) can match on one enum and map
//! each kind to a user-facing message themselves.  Failures are
//! deterministic functions of the inputs and the committed state; the
//! core never retries.

use thiserror::Error;

use crate::domain::Amount;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DexError>;

/// All error kinds produced by the registry, pools, math layer and the
/// reference ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DexError {
    /// A pool already exists for the canonical pair key.
    #[error("pair already exists")]
    AlreadyExists,

    /// No pool is registered for the requested pair or id.
    #[error("pair not found")]
    PairNotFound,

    /// Reserves are empty, or a deposit/withdrawal would mint or pay out
    /// nothing.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The computed output is below the caller's slippage bound.
    #[error("insufficient output amount: quoted {quoted}, minimum {minimum}")]
    InsufficientOutputAmount {
        /// Output the pool would pay at the current reserves.
        quoted: Amount,
        /// Minimum the caller was willing to accept.
        minimum: Amount,
    },

    /// A swap or quote was requested for a zero input amount.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// A share or token balance is too small for the requested debit.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The ledger allowance granted to the pool does not cover a pull.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// A token is not part of the pool, or a pair was built from one token.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// An account cannot take part in the requested transfer.
    #[error("invalid account: {0}")]
    InvalidAccount(&'static str),

    /// A checked multiply, add or narrowing conversion would overflow.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for DexError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}
