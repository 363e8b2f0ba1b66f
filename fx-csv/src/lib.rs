#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;

use fx_core::models::{CurrencyCode, RateTable};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CURRENCY_COLUMN: &str = "currency";
const RATE_COLUMN: &str = "rate_to_rub";

/// Loads a rate table from a CSV file.
///
/// The expected layout is a header row with exactly the columns `currency`
/// and `rate_to_rub` (in either order), followed by one row per currency.
/// Rates are the value of one unit of the row's currency in the base
/// currency.
#[derive(Debug, Clone)]
pub struct CsvRatesLoader {
    path: PathBuf,
}

impl CsvRatesLoader {
    /// Create a loader for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the file into a [`RateTable`].
    ///
    /// Later rows for a duplicate currency overwrite earlier ones; the base
    /// currency is synthesized at rate 1.0 when no row defines it.
    ///
    /// # Errors
    ///
    /// Any structural or value problem fails the whole load with a
    /// [`RatesSourceError`]; there is no partial result.
    pub fn load(&self) -> Result<RateTable, RatesSourceError> {
        let file = File::open(&self.path).map_err(|source| RatesSourceError::Open {
            path: self.path.clone(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(RatesSourceError::NoHeader);
        }
        let currency_idx = headers.iter().position(|name| name == CURRENCY_COLUMN);
        let rate_idx = headers.iter().position(|name| name == RATE_COLUMN);
        let (currency_idx, rate_idx) = match (headers.len(), currency_idx, rate_idx) {
            (2, Some(currency_idx), Some(rate_idx)) => (currency_idx, rate_idx),
            _ => {
                return Err(RatesSourceError::BadHeader {
                    found: headers.iter().collect::<Vec<_>>().join(","),
                });
            }
        };

        let mut rates = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // header is line 1, so the first record starts at line 2
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or(idx as u64 + 2);

            let code = CurrencyCode::parse(record.get(currency_idx).unwrap_or(""))
                .map_err(|_| RatesSourceError::EmptyCurrency { line })?;

            let raw_rate = record.get(rate_idx).unwrap_or("");
            let rate: f64 = raw_rate
                .parse()
                .map_err(|_| RatesSourceError::InvalidRate {
                    line,
                    value: raw_rate.to_string(),
                })?;
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RatesSourceError::NonPositiveRate { line, rate });
            }

            rates.push((code, rate));
        }

        Ok(RateTable::new(rates))
    }
}

/// Errors that make a rates source unusable.
///
/// All of them are fatal at startup: the service must refuse to run with a
/// partial or questionable table rather than serve wrong conversions.
#[derive(Debug, Error)]
pub enum RatesSourceError {
    /// The file is missing or unreadable
    #[error("cannot open rates file {path}: {source}")]
    Open {
        /// The configured rates file location
        path: PathBuf,
        /// The underlying I/O failure
        source: std::io::Error,
    },
    /// The file has no header row
    #[error("rates file has no header row")]
    NoHeader,
    /// The header is not exactly the two required columns
    #[error("rates file header must be exactly `currency,rate_to_rub`, got `{found}`")]
    BadHeader {
        /// The header row as found in the file
        found: String,
    },
    /// A row has an empty currency code
    #[error("empty currency code at line {line}")]
    EmptyCurrency {
        /// 1-based line number of the offending row
        line: u64,
    },
    /// A rate field could not be parsed as a number
    #[error("invalid rate at line {line}: {value:?}")]
    InvalidRate {
        /// 1-based line number of the offending row
        line: u64,
        /// The unparseable field content
        value: String,
    },
    /// A rate was zero, negative, or not finite
    #[error("rate must be > 0 at line {line}, got {rate}")]
    NonPositiveRate {
        /// 1-based line number of the offending row
        line: u64,
        /// The rejected rate value
        rate: f64,
    },
    /// The underlying CSV reader failed (I/O mid-read or ragged rows)
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("rates.csv");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn load(content: &str) -> Result<RateTable, RatesSourceError> {
        let dir = TempDir::new().unwrap();
        CsvRatesLoader::new(write(&dir, content)).load()
    }

    #[test]
    fn test_load_ok() {
        let table = load("currency,rate_to_rub\nRUB,1\nUSD,92.5\nEUR,100.2\n").unwrap();
        assert_eq!(table.rate_to_base("usd").unwrap(), 92.5);
        assert_eq!(table.rate_to_base("RUB").unwrap(), 1.0);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_base_synthesized_when_missing() {
        let table = load("currency,rate_to_rub\nUSD,92.5\n").unwrap();
        assert_eq!(table.rate_to_base("RUB").unwrap(), 1.0);
    }

    #[test]
    fn test_header_order_irrelevant() {
        let table = load("rate_to_rub,currency\n92.5,USD\n").unwrap();
        assert_eq!(table.rate_to_base("USD").unwrap(), 92.5);
    }

    #[test]
    fn test_header_and_fields_trimmed() {
        let table = load(" currency , rate_to_rub \n usd , 92.5 \n").unwrap();
        assert_eq!(table.rate_to_base("USD").unwrap(), 92.5);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = CsvRatesLoader::new(dir.path().join("nope.csv")).load();
        assert!(matches!(result, Err(RatesSourceError::Open { .. })));
    }

    #[test]
    fn test_empty_file_has_no_header() {
        assert!(matches!(load(""), Err(RatesSourceError::NoHeader)));
    }

    #[test]
    fn test_wrong_header() {
        assert!(matches!(
            load("cur,rate\nUSD,1\n"),
            Err(RatesSourceError::BadHeader { .. })
        ));
    }

    #[test]
    fn test_extra_column_rejected() {
        assert!(matches!(
            load("currency,rate_to_rub,comment\nUSD,92.5,ok\n"),
            Err(RatesSourceError::BadHeader { .. })
        ));
    }

    #[test]
    fn test_empty_currency_code() {
        assert!(matches!(
            load("currency,rate_to_rub\n,10\n"),
            Err(RatesSourceError::EmptyCurrency { line: 2 })
        ));
    }

    #[test]
    fn test_unparseable_rate() {
        assert!(matches!(
            load("currency,rate_to_rub\nRUB,1\nUSD,abc\n"),
            Err(RatesSourceError::InvalidRate { line: 3, .. })
        ));
    }

    #[test]
    fn test_non_positive_rates() {
        for rate in ["0", "-3.5", "inf", "NaN"] {
            let content = format!("currency,rate_to_rub\nUSD,{rate}\n");
            assert!(
                matches!(
                    load(&content),
                    Err(RatesSourceError::NonPositiveRate { line: 2, .. })
                ),
                "rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn test_duplicate_rows_last_wins() {
        let table = load("currency,rate_to_rub\nUSD,90\nUSD,92.5\n").unwrap();
        assert_eq!(table.rate_to_base("USD").unwrap(), 92.5);
    }

    #[test]
    fn test_default_config_path() {
        assert_eq!(
            config::RatesConfig::default().path,
            Path::new("data/rates.csv")
        );
    }
}
