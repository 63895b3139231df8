//! Registry-wide configuration.

use serde::{Deserialize, Serialize};

use super::PoolConfig;
use crate::error::Result;

/// Top-level exchange configuration.
///
/// Loadable from TOML:
///
/// ```
/// use lite_dex::config::DexConfig;
///
/// let config = DexConfig::from_toml_str(r#"
///     record_events = false
///
///     [pool]
///     fee_tier = 5
///     share_symbol = "STB-LP"
/// "#).unwrap();
///
/// assert_eq!(config.pool().fee_tier().basis_points().get(), 5);
/// assert_eq!(config.pool().share_name(), "LiteDEX LP Token");
/// assert!(!config.record_events());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DexConfig {
    record_events: bool,
    pool: PoolConfig,
}

impl DexConfig {
    /// Creates a validated `DexConfig`.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`] failures.
    pub fn new(pool: PoolConfig, record_events: bool) -> Result<Self> {
        let config = Self {
            record_events,
            pool,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// - [`DexError::ConfigParse`](crate::error::DexError::ConfigParse) on
    ///   malformed TOML or unknown keys.
    /// - [`DexError::InvalidConfiguration`](crate::error::DexError::InvalidConfiguration)
    ///   if a value fails validation.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`] failures.
    pub fn validate(&self) -> Result<()> {
        self.pool.validate()
    }

    /// Parameters for newly created pools.
    #[must_use]
    pub const fn pool(&self) -> &PoolConfig {
        &self.pool
    }

    /// Whether the registry journals [`DexEvent`](crate::domain::DexEvent)s.
    #[must_use]
    pub const fn record_events(&self) -> bool {
        self.record_events
    }
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            record_events: true,
            pool: PoolConfig::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::DexError;

    #[test]
    fn empty_document_yields_defaults() {
        let Ok(config) = DexConfig::from_toml_str("") else {
            panic!("expected Ok");
        };
        assert_eq!(config, DexConfig::default());
        assert!(config.record_events());
    }

    #[test]
    fn invalid_fee_is_rejected_after_parsing() {
        let result = DexConfig::from_toml_str("[pool]\nfee_tier = 10000\n");
        assert!(matches!(result, Err(DexError::InvalidConfiguration(_))));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let result = DexConfig::from_toml_str("max_pairs = 3\n");
        assert!(matches!(result, Err(DexError::ConfigParse(_))));
    }

    #[test]
    fn serializes_back_to_toml() {
        let Ok(text) = toml::to_string(&DexConfig::default()) else {
            panic!("serialize");
        };
        let Ok(parsed) = DexConfig::from_toml_str(&text) else {
            panic!("parse");
        };
        assert_eq!(parsed, DexConfig::default());
    }
}
