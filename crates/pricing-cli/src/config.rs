//! Configuration loading for the pricing CLI

use anyhow::{Context, Result};
use pricing_engine::PricingConfig;
use std::path::Path;

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "pricing.toml";

/// Load a pricing config from a TOML file
pub fn load(path: &Path) -> Result<PricingConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

    PricingConfig::from_toml_str(&content).with_context(|| {
        format!(
            "Failed to load {}. Check for:\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - market.recommended_monthly must be greater than zero\n\
             - placeholders.daily / placeholders.hybrid must not be negative\n\n\
             See pricing.toml.example for the expected format.",
            path.display()
        )
    })
}

/// Resolve the config for this run
///
/// An explicit path must exist. Without one, `pricing.toml` is used when
/// present and built-in defaults otherwise.
pub fn resolve(explicit: Option<&Path>) -> Result<PricingConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Config file '{}' not found.", path.display());
        }
        return load(path);
    }

    let default_path = Path::new(CONFIG_FILE);
    if default_path.exists() {
        tracing::debug!(path = CONFIG_FILE, "using config from working directory");
        load(default_path)
    } else {
        tracing::debug!("no config file, using built-in defaults");
        Ok(PricingConfig::default())
    }
}
