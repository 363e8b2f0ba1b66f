//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple
//! sources with a clear precedence order. Configuration can come from default
//! values, a configuration file, environment variables, and CLI flags.

use crate::Cli;
use serde::{Deserialize, Serialize};

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address)
    #[serde(default)]
    pub server: fx_axum::config::AxumConfig,

    /// Rates source configuration (CSV file location)
    #[serde(default)]
    pub rates: fx_csv::config::RatesConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI flags (highest priority)
    /// 2. Environment variables
    /// 3. Config file given by the CLI
    /// 4. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Set the rates file via environment variable
    /// export APP_RATES__PATH="/etc/fx/rates.csv"
    ///
    /// # Set server bind address
    /// export APP_SERVER__BIND_ADDRESS="0.0.0.0:3000"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps APP_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut app_config: Self = config.build()?.try_deserialize()?;

        // The CLI flag wins over both the file and the environment
        if let Some(rates) = &cli.rates {
            app_config.rates.path = rates.clone();
        }

        Ok(app_config)
    }
}
