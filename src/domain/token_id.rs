//! Opaque token identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::hex32;

/// A 32-byte key identifying a fungible token on the external ledger.
///
/// All 32-byte sequences are valid. Ordering is lexicographic over the
/// bytes and is what [`PairKey`](super::PairKey) uses to canonicalize a
/// pair.
///
/// # Examples
///
/// ```
/// use lite_dex::domain::TokenId;
///
/// let a = TokenId::from_bytes([1u8; 32]);
/// let b = TokenId::from_bytes([2u8; 32]);
/// assert!(a < b);
/// assert!(a.to_string().starts_with("0x0101"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(#[serde(with = "hex32")] [u8; 32]);

impl TokenId {
    /// Creates a `TokenId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a `TokenId` by hashing a human-readable label such as a
    /// ticker symbol. Handy for fixtures and demos.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self(*blake3::hash(label.as_bytes()).as_bytes())
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex32::encode(&self.0))
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", hex32::encode(&self.0))
    }
}
