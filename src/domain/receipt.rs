//! Receipt returned by liquidity deposits and withdrawals.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, PoolId, Reserves, Shares};

/// Whether a receipt records a deposit or a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityAction {
    /// Tokens in, shares minted.
    Added,
    /// Shares burned, tokens out.
    Removed,
}

/// Result of `add_liquidity` or `remove_liquidity`.
///
/// For a deposit, `shares` were minted to `provider` and `amount_a` /
/// `amount_b` pulled from it. For a withdrawal, `shares` were burned and
/// the amounts pushed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityReceipt {
    /// Deposit or withdrawal.
    pub action: LiquidityAction,
    /// Pool the change applied to.
    pub pool: PoolId,
    /// Account that supplied or received the tokens.
    pub provider: AccountId,
    /// Shares minted or burned.
    pub shares: Shares,
    /// Token A moved.
    pub amount_a: Amount,
    /// Token B moved.
    pub amount_b: Amount,
    /// Reserves after the change.
    pub reserves: Reserves,
    /// Total share supply after the change.
    pub total_shares: Shares,
}
