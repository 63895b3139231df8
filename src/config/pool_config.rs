//! Per-pool parameters.

use serde::{Deserialize, Serialize};

use crate::domain::FeeTier;
use crate::error::{DexError, Result};

/// Default LP share token name.
pub const DEFAULT_SHARE_NAME: &str = "LiteDEX LP Token";

/// Default LP share token symbol.
pub const DEFAULT_SHARE_SYMBOL: &str = "LDX-LP";

/// Parameters applied to every pool created by a registry.
///
/// # Validation
///
/// - The fee must be strictly below 100%, otherwise no input survives
///   the fee and every swap would quote zero.
/// - Share name and symbol must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    fee_tier: FeeTier,
    share_name: String,
    share_symbol: String,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if validation fails.
    pub fn new(
        fee_tier: FeeTier,
        share_name: impl Into<String>,
        share_symbol: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            fee_tier,
            share_name: share_name.into(),
            share_symbol: share_symbol.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] naming the first
    /// violated rule.
    pub fn validate(&self) -> Result<()> {
        if !self.fee_tier.is_tradeable() {
            return Err(DexError::InvalidConfiguration(
                "fee tier must be below 100 percent",
            ));
        }
        if self.share_name.trim().is_empty() {
            return Err(DexError::InvalidConfiguration("share name is empty"));
        }
        if self.share_symbol.trim().is_empty() {
            return Err(DexError::InvalidConfiguration("share symbol is empty"));
        }
        Ok(())
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the LP share token name.
    #[must_use]
    pub fn share_name(&self) -> &str {
        &self.share_name
    }

    /// Returns the LP share token symbol.
    #[must_use]
    pub fn share_symbol(&self) -> &str {
        &self.share_symbol
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fee_tier: FeeTier::default(),
            share_name: DEFAULT_SHARE_NAME.to_owned(),
            share_symbol: DEFAULT_SHARE_SYMBOL.to_owned(),
        }
    }
}
