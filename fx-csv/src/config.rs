//! Configuration types for the rates source.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the CSV rates source.
///
/// # Examples
///
/// ```
/// use fx_csv::config::RatesConfig;
/// use std::path::PathBuf;
///
/// // Default location, relative to the working directory
/// let config = RatesConfig::default();
/// assert_eq!(config.path, PathBuf::from("data/rates.csv"));
///
/// // Custom location
/// let config = RatesConfig {
///     path: PathBuf::from("/etc/fx/rates.csv"),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RatesConfig {
    /// Path to the rates CSV file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/rates.csv")
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
