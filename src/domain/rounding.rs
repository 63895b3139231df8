//! Explicit rounding direction for integer division.

use serde::{Deserialize, Serialize};

/// Which way a division truncates.
///
/// Every division in the crate takes a `Rounding` so that the direction
/// favouring the pool is visible at the call site: outputs and shares
/// minted round [`Down`](Self::Down), required inputs round
/// [`Up`](Self::Up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
