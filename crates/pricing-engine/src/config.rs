//! Session-constant pricing configuration
//!
//! Every field is optional in TOML; omitted values fall back to the widget
//! defaults in constants.rs.

use serde::Deserialize;

use crate::constants;

/// Errors from parsing or validating a pricing config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pricing config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("market.recommended_monthly must be a positive number, got {0}")]
    InvalidBenchmark(f64),

    #[error("placeholders.{slot} must be a non-negative number, got {value}")]
    InvalidPlaceholder { slot: &'static str, value: f64 },
}

/// Configuration read from the `[market]` and `[placeholders]` tables
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub market: MarketConfig,
    pub placeholders: PlaceholderConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Recommended monthly market rate
    pub recommended_monthly: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            recommended_monthly: constants::DEFAULT_RECOMMENDED_MONTHLY,
        }
    }
}

/// Daily/hybrid values shown before a monthly price is entered
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub daily: f64,
    pub hybrid: f64,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            daily: constants::DEFAULT_DAILY_PLACEHOLDER,
            hybrid: constants::DEFAULT_HYBRID_PLACEHOLDER,
        }
    }
}

impl PricingConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PricingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let benchmark = self.market.recommended_monthly;
        if !benchmark.is_finite() || benchmark <= 0.0 {
            return Err(ConfigError::InvalidBenchmark(benchmark));
        }

        for (slot, value) in [("daily", self.placeholders.daily), ("hybrid", self.placeholders.hybrid)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPlaceholder { slot, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PricingConfig::from_toml_str("").unwrap();
        assert_eq!(config, PricingConfig::default());
        assert_eq!(config.market.recommended_monthly, 200.0);
        assert_eq!(config.placeholders.daily, 18.0);
        assert_eq!(config.placeholders.hybrid, 97.0);
    }

    #[test]
    fn test_partial_config() {
        let config = PricingConfig::from_toml_str(
            r#"
            [market]
            recommended_monthly = 240.0

            [placeholders]
            hybrid = 110.0
            "#,
        )
        .unwrap();
        assert_eq!(config.market.recommended_monthly, 240.0);
        assert_eq!(config.placeholders.daily, 18.0);
        assert_eq!(config.placeholders.hybrid, 110.0);
    }

    #[test]
    fn test_rejects_non_positive_benchmark() {
        let err = PricingConfig::from_toml_str("[market]\nrecommended_monthly = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBenchmark(v) if v == 0.0));
    }

    #[test]
    fn test_rejects_negative_placeholder() {
        let err = PricingConfig::from_toml_str("[placeholders]\ndaily = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlaceholder { slot: "daily", .. }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = PricingConfig::from_toml_str("[market\nrecommended_monthly = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
