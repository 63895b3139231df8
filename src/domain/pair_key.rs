//! Canonical, order-independent key for a pair of distinct tokens.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::TokenId;
use crate::error::DexError;

/// Which side of a pair a token sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The lower token id (`token_a`).
    A,
    /// The higher token id (`token_b`).
    B,
}

impl Side {
    /// The opposite side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A pair of distinct tokens sorted by id.
///
/// `PairKey::new(x, y) == PairKey::new(y, x)` for any distinct `x`, `y`,
/// which is what makes the registry's pair map unordered.
///
/// # Examples
///
/// ```
/// use lite_dex::domain::{PairKey, TokenId};
///
/// let x = TokenId::from_bytes([2u8; 32]);
/// let y = TokenId::from_bytes([1u8; 32]);
///
/// let key = PairKey::new(x, y).unwrap();
/// assert_eq!(key.first(), y);
/// assert_eq!(key, PairKey::new(y, x).unwrap());
/// assert!(PairKey::new(x, x).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    token_a: TokenId,
    token_b: TokenId,
}

impl PairKey {
    /// Creates the canonical key for `x` and `y`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidToken`] if `x == y`.
    pub fn new(x: TokenId, y: TokenId) -> Result<Self, DexError> {
        if x == y {
            return Err(DexError::InvalidToken(
                "token pair requires two distinct tokens",
            ));
        }
        let (token_a, token_b) = if x < y { (x, y) } else { (y, x) };
        Ok(Self { token_a, token_b })
    }

    /// Returns the lower token id.
    #[must_use]
    pub const fn first(&self) -> TokenId {
        self.token_a
    }

    /// Returns the higher token id.
    #[must_use]
    pub const fn second(&self) -> TokenId {
        self.token_b
    }

    /// Returns `true` if `token` is one of the two tokens.
    #[must_use]
    pub fn contains(&self, token: &TokenId) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns the side `token` sits on.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidToken`] if `token` is not in the pair.
    pub fn side_of(&self, token: &TokenId) -> Result<Side, DexError> {
        if *token == self.token_a {
            Ok(Side::A)
        } else if *token == self.token_b {
            Ok(Side::B)
        } else {
            Err(DexError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Returns the token on `side`.
    #[must_use]
    pub const fn token(&self, side: Side) -> TokenId {
        match side {
            Side::A => self.token_a,
            Side::B => self.token_b,
        }
    }

    /// Returns the counterpart of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &TokenId) -> Result<TokenId, DexError> {
        self.side_of(token).map(|side| self.token(side.flip()))
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token_a, self.token_b)
    }
}
