//! Registry-assigned pool handle.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Sequential index of a pool within its [`PairRegistry`](crate::registry::PairRegistry).
///
/// Ids are handed out in creation order starting at zero and are never
/// reused, so a `PoolId` doubles as the pair's position in
/// [`all_pairs`](crate::registry::PairRegistry::all_pairs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(u32);

impl PoolId {
    /// Creates a `PoolId` from its raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize` for slice access.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}
