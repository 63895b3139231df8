//! In-memory multi-token ledger with ERC-20 style allowances.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{AccountId, Amount, TokenId};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::TokenLedger;

/// Balances, allowances and supplies for any number of tokens.
///
/// Used by tests and the demo in place of a real chain. Semantics follow
/// a standard fungible token: an allowance of [`Amount::MAX`] is treated
/// as unlimited and is not decremented by `transfer_from`.
///
/// # Examples
///
/// ```
/// use lite_dex::domain::{AccountId, Amount, TokenId};
/// use lite_dex::ledger::InMemoryLedger;
/// use lite_dex::traits::TokenLedger;
///
/// let tka = TokenId::from_label("TKA");
/// let alice = AccountId::from_label("alice");
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(tka, alice, Amount::new(1_000)).unwrap();
/// assert_eq!(ledger.balance_of(tka, alice), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<(TokenId, AccountId), Amount>,
    allowances: HashMap<(TokenId, AccountId, AccountId), Amount>,
    supplies: HashMap<TokenId, Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` of `token` in `to`'s balance.
    ///
    /// # Errors
    ///
    /// [`DexError::ArithmeticOverflow`] if the supply would exceed `u128`.
    pub fn mint(&mut self, token: TokenId, to: AccountId, amount: Amount) -> Result<()> {
        let supply = self.total_supply(token).safe_add(&amount)?;
        let balance = self.balance_of(token, to).safe_add(&amount)?;
        self.supplies.insert(token, supply);
        self.balances.insert((token, to), balance);
        trace!(%token, %to, %amount, "mint");
        Ok(())
    }

    /// Total minted supply of `token`.
    #[must_use]
    pub fn total_supply(&self, token: TokenId) -> Amount {
        self.supplies.get(&token).copied().unwrap_or_default()
    }

    fn move_balance(
        &mut self,
        token: TokenId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let from_balance = self
            .balance_of(token, from)
            .checked_sub(&amount)
            .ok_or(DexError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self.balance_of(token, to).safe_add(&amount)?;
        self.balances.insert((token, from), from_balance);
        self.balances.insert((token, to), to_balance);
        Ok(())
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, token: TokenId, holder: AccountId) -> Amount {
        self.balances
            .get(&(token, holder))
            .copied()
            .unwrap_or_default()
    }

    fn allowance(&self, token: TokenId, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    fn approve(
        &mut self,
        token: TokenId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<()> {
        self.allowances.insert((token, owner, spender), amount);
        Ok(())
    }

    fn transfer(
        &mut self,
        token: TokenId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        self.move_balance(token, from, to, amount)?;
        trace!(%token, %from, %to, %amount, "transfer");
        Ok(())
    }

    fn transfer_from(
        &mut self,
        token: TokenId,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let allowance = self.allowance(token, from, spender);
        let remaining = allowance
            .checked_sub(&amount)
            .ok_or(DexError::InsufficientAllowance)?;
        self.move_balance(token, from, to, amount)?;
        if allowance != Amount::MAX {
            self.allowances.insert((token, from, spender), remaining);
        }
        trace!(%token, %spender, %from, %to, %amount, "transfer_from");
        Ok(())
    }
}
