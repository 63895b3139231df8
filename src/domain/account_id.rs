//! Ledger account identifier for providers, traders and pools.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{hex32, PairKey};

/// Domain separator for pool account derivation.
const POOL_ACCOUNT_DOMAIN: &[u8] = b"LITE_DEX_POOL_V1";

/// A 32-byte account key on the external token ledger.
///
/// User accounts are chosen by the caller. Pool accounts are derived from
/// the pair with [`AccountId::for_pool`], so every pool holds its reserves
/// in its own ledger account.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(#[serde(with = "hex32")] [u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives an account from a label (e.g. `"alice"`).
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self(*blake3::hash(label.as_bytes()).as_bytes())
    }

    /// Returns the account that holds the reserves of `pair`.
    ///
    /// `blake3(POOL_ACCOUNT_DOMAIN || first || second)`; since the key is
    /// canonical, both token orders map to the same account.
    #[must_use]
    pub fn for_pool(pair: &PairKey) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(POOL_ACCOUNT_DOMAIN);
        hasher.update(pair.first().as_bytes());
        hasher.update(pair.second().as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex32::encode(&self.0))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", hex32::encode(&self.0))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TokenId;

    fn pair(x: u8, y: u8) -> PairKey {
        let Ok(p) = PairKey::new(TokenId::from_bytes([x; 32]), TokenId::from_bytes([y; 32])) else {
            panic!("distinct tokens");
        };
        p
    }

    #[test]
    fn pool_account_ignores_argument_order() {
        assert_eq!(AccountId::for_pool(&pair(1, 2)), AccountId::for_pool(&pair(2, 1)));
    }

    #[test]
    fn pool_accounts_differ_per_pair() {
        assert_ne!(AccountId::for_pool(&pair(1, 2)), AccountId::for_pool(&pair(1, 3)));
    }

    #[test]
    fn pool_account_is_not_a_label_account() {
        let p = pair(1, 2);
        let mut raw = Vec::new();
        raw.extend_from_slice(p.first().as_bytes());
        raw.extend_from_slice(p.second().as_bytes());
        let undomained = AccountId::from_bytes(*blake3::hash(&raw).as_bytes());
        assert_ne!(AccountId::for_pool(&p), undomained);
    }
}
