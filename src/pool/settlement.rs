//! All-or-nothing settlement of a pool operation against the token ledger.
//!
//! An operation is a short list of [`Leg`]s: pulls from a user into the
//! pool account (via allowance) and pushes from the pool account to a
//! user. [`settle`] checks every leg up front, then executes them in
//! order. If a leg still fails, the legs already executed are reversed
//! newest first and the pulled users' allowances are restored, so the
//! ledger is left as it was.

use tracing::{error, warn};

use crate::domain::{AccountId, Amount, TokenId};
use crate::error::{DexError, Result};
use crate::traits::TokenLedger;

/// One token movement between a user and the pool account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Leg {
    /// `user -> pool`, spending the user's allowance to the pool.
    Pull {
        token: TokenId,
        user: AccountId,
        amount: Amount,
    },
    /// `pool -> user`.
    Push {
        token: TokenId,
        user: AccountId,
        amount: Amount,
    },
}

impl Leg {
    const fn amount(&self) -> Amount {
        match self {
            Self::Pull { amount, .. } | Self::Push { amount, .. } => *amount,
        }
    }

    const fn user(&self) -> AccountId {
        match self {
            Self::Pull { user, .. } | Self::Push { user, .. } => *user,
        }
    }
}

/// A leg that went through, with what is needed to reverse it.
struct Executed {
    leg: Leg,
    allowance_before: Amount,
}

/// Executes `legs` for the pool holding `pool_account`, atomically.
///
/// Zero-amount legs are skipped.
///
/// # Errors
///
/// The error of the first failing check or leg. On error the ledger
/// state is unchanged, unless a compensating transfer itself failed,
/// which is logged at `error` level.
pub(crate) fn settle<L: TokenLedger>(
    ledger: &mut L,
    pool_account: AccountId,
    legs: &[Leg],
) -> Result<()> {
    preflight(ledger, pool_account, legs)?;

    let mut executed: Vec<Executed> = Vec::with_capacity(legs.len());
    for leg in legs.iter().filter(|leg| !leg.amount().is_zero()) {
        let allowance_before = match *leg {
            Leg::Pull { token, user, .. } => ledger.allowance(token, user, pool_account),
            Leg::Push { .. } => Amount::ZERO,
        };
        if let Err(err) = execute(ledger, pool_account, leg) {
            warn!(%pool_account, ?leg, %err, rolled_back = executed.len(), "settlement leg failed");
            compensate(ledger, pool_account, &executed);
            return Err(err);
        }
        executed.push(Executed {
            leg: *leg,
            allowance_before,
        });
    }
    Ok(())
}

fn preflight<L: TokenLedger>(ledger: &L, pool_account: AccountId, legs: &[Leg]) -> Result<()> {
    for leg in legs {
        if leg.user() == pool_account {
            return Err(DexError::InvalidAccount(
                "pool account cannot trade with itself",
            ));
        }
        match *leg {
            Leg::Pull {
                token,
                user,
                amount,
            } => {
                if ledger.allowance(token, user, pool_account) < amount {
                    return Err(DexError::InsufficientAllowance);
                }
                if ledger.balance_of(token, user) < amount {
                    return Err(DexError::InsufficientBalance);
                }
            }
            Leg::Push { token, amount, .. } => {
                if ledger.balance_of(token, pool_account) < amount {
                    return Err(DexError::InsufficientBalance);
                }
            }
        }
    }
    Ok(())
}

fn execute<L: TokenLedger>(ledger: &mut L, pool_account: AccountId, leg: &Leg) -> Result<()> {
    match *leg {
        Leg::Pull {
            token,
            user,
            amount,
        } => ledger.transfer_from(token, pool_account, user, pool_account, amount),
        Leg::Push {
            token,
            user,
            amount,
        } => ledger.transfer(token, pool_account, user, amount),
    }
}

fn compensate<L: TokenLedger>(ledger: &mut L, pool_account: AccountId, executed: &[Executed]) {
    for done in executed.iter().rev() {
        let result = match done.leg {
            Leg::Pull {
                token,
                user,
                amount,
            } => ledger
                .transfer(token, pool_account, user, amount)
                .and_then(|()| ledger.approve(token, user, pool_account, done.allowance_before)),
            Leg::Push {
                token,
                user,
                amount,
            } => ledger.transfer(token, user, pool_account, amount),
        };
        if let Err(err) = result {
            error!(%pool_account, leg = ?done.leg, %err, "compensating transfer failed");
        }
    }
}
