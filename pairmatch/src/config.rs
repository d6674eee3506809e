//! Application configuration management.
//!
//! Configuration is merged from default values, an optional TOML file, and
//! environment variables, in increasing order of precedence.

use pairing_core::models::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Unit price, leftover fraction and negotiation policy
    #[serde(default)]
    pub pricing: Config,

    /// The largest input side the exhaustive method is allowed to run on
    #[serde(default = "default_exhaustive_limit")]
    pub exhaustive_limit: usize,
}

fn default_exhaustive_limit() -> usize {
    8
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: Config::default(),
            exhaustive_limit: default_exhaustive_limit(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `PAIRMATCH_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Sell at 2.5 per unit of weight
    /// export PAIRMATCH_PRICING__UNIT_PRICE=2.5
    ///
    /// # Split the difference
    /// export PAIRMATCH_PRICING__POLICY=midpoint
    ///
    /// # Allow slightly larger exhaustive searches
    /// export PAIRMATCH_EXHAUSTIVE_LIMIT=9
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::layered(path.map(|path| ::config::File::from(path).required(true)))
    }

    fn layered<T>(file: Option<T>) -> anyhow::Result<Self>
    where
        T: ::config::Source + Send + Sync + 'static,
    {
        let mut config = ::config::Config::builder();

        // Start with default values
        config = config.add_source(::config::Config::try_from(&Self::default())?);

        // Layer on the config file, if any
        if let Some(file) = file {
            config = config.add_source(file);
        }

        // Override with environment variables
        // This maps PAIRMATCH_PRICING__UNIT_PRICE to pricing.unit_price
        config = config.add_source(
            ::config::Environment::with_prefix("PAIRMATCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::{File, FileFormat};
    use pairing_core::models::NegotiationPolicy;

    #[test]
    fn file_overrides_defaults() {
        let toml = r#"
            exhaustive_limit = 5

            [pricing]
            leftover_fraction = 0.25
            policy = "midpoint"
        "#;
        let config = AppConfig::layered(Some(File::from_str(toml, FileFormat::Toml))).unwrap();

        assert_eq!(config.exhaustive_limit, 5);
        assert_eq!(config.pricing.pricing.unit_price(), 1.0);
        assert_eq!(config.pricing.pricing.leftover_fraction(), 0.25);
        assert_eq!(config.pricing.policy, NegotiationPolicy::Midpoint);
    }

    #[test]
    fn invalid_file_values_are_rejected() {
        let toml = "[pricing]\nunit_price = -1.0\n";
        assert!(AppConfig::layered(Some(File::from_str(toml, FileFormat::Toml))).is_err());
    }

    #[test]
    fn file_on_disk() {
        let path = std::env::temp_dir().join(format!("pairmatch-{}-config.toml", std::process::id()));
        std::fs::write(&path, "exhaustive_limit = 3\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.exhaustive_limit, 3);
        assert_eq!(config.pricing, Default::default());
    }

    #[test]
    fn missing_file() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/pairmatch.toml"))).is_err());
    }
}
