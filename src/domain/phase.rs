//! Pool lifecycle phase.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Where a pool is in its lifecycle.
///
/// ```text
/// Empty --add_liquidity--> Seeded --swap--> Active
///   ^                        |                |
///   +---- remove all shares -+----------------+
/// ```
///
/// Further deposits into a `Seeded` or `Active` pool leave it `Active`.
/// Pools are never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolPhase {
    /// No reserves and no shares.
    #[default]
    Empty,
    /// Holds the first deposit; no trade or second deposit yet.
    Seeded,
    /// Has seen a swap or a follow-on deposit.
    Active,
}

impl PoolPhase {
    /// Returns `true` if swaps and quotes are possible.
    #[must_use]
    pub const fn is_tradeable(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl fmt::Display for PoolPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Empty => "empty",
            Self::Seeded => "seeded",
            Self::Active => "active",
        };
        f.write_str(s)
    }
}
