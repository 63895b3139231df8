//! External fungible-token ledger capability.
//!
//! The exchange never owns token balances. A pool's reserves live in the
//! pool's own [`AccountId`] on a ledger the caller injects, and every
//! deposit, withdrawal and trade is settled through this trait.
//!
//! # Allowance model
//!
//! Pulls from a user go through [`TokenLedger::transfer_from`] with the
//! pool account as spender, so the user must [`approve`](TokenLedger::approve)
//! the pool first. Pushes out of the pool are plain
//! [`transfer`](TokenLedger::transfer)s from the pool account.
//!
//! # Failure contract
//!
//! A failing call must leave the ledger unchanged. Pools rely on this
//! when compensating a partially settled operation.

use crate::domain::{AccountId, Amount, TokenId};
use crate::error::Result;

/// Balance, transfer and allowance semantics keyed by token.
///
/// Implementations are expected to reject with
/// [`DexError::InsufficientBalance`](crate::error::DexError::InsufficientBalance)
/// and [`DexError::InsufficientAllowance`](crate::error::DexError::InsufficientAllowance)
/// rather than clamp.
pub trait TokenLedger {
    /// Balance of `holder` in `token`.
    fn balance_of(&self, token: TokenId, holder: AccountId) -> Amount;

    /// Amount `spender` may still pull from `owner` in `token`.
    fn allowance(&self, token: TokenId, owner: AccountId, spender: AccountId) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s `token` to `amount`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the in-memory ledger never fails.
    fn approve(
        &mut self,
        token: TokenId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<()>;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`DexError::InsufficientBalance`](crate::error::DexError::InsufficientBalance)
    /// if `from` holds less than `amount`.
    fn transfer(
        &mut self,
        token: TokenId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()>;

    /// Moves `amount` of `token` from `from` to `to` on behalf of
    /// `spender`, consuming allowance.
    ///
    /// # Errors
    ///
    /// [`DexError::InsufficientAllowance`](crate::error::DexError::InsufficientAllowance)
    /// or [`DexError::InsufficientBalance`](crate::error::DexError::InsufficientBalance).
    fn transfer_from(
        &mut self,
        token: TokenId,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()>;
}
