use thiserror::Error;

/// The pivot currency through which all cross-rate conversions are computed.
pub const BASE_CURRENCY: &str = "RUB";

/// A normalized currency identifier.
///
/// Construction always goes through [`CurrencyCode::parse`], so a value of
/// this type is guaranteed to be trimmed, uppercased, and non-empty. The rate
/// table uses it as its only lookup key, which makes lookups insensitive to
/// the casing and padding of user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[cfg_attr(
    feature = "schemars",
    derive(schemars::JsonSchema),
    schemars(transparent)
)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Normalize a raw code: trim surrounding whitespace and uppercase.
    ///
    /// A code that is empty after trimming fails with
    /// [`UnknownCurrency::Empty`].
    pub fn parse(code: &str) -> Result<Self, UnknownCurrency> {
        let code = code.trim();
        if code.is_empty() {
            return Err(UnknownCurrency::Empty);
        }
        Ok(Self(code.to_uppercase()))
    }

    /// The base currency code.
    pub fn base() -> Self {
        Self(BASE_CURRENCY.to_string())
    }

    /// View the normalized code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = UnknownCurrency;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Failure to resolve a currency code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownCurrency {
    /// The code was empty after trimming
    #[error("currency code is empty")]
    Empty,
    /// The normalized code has no entry in the rate table
    #[error("unknown currency: {0}")]
    Missing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let code = CurrencyCode::parse(" usd ").unwrap();
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code, CurrencyCode::parse("USD").unwrap());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(CurrencyCode::parse("").unwrap_err(), UnknownCurrency::Empty);
        assert_eq!(
            CurrencyCode::parse("   ").unwrap_err(),
            UnknownCurrency::Empty
        );
    }

    #[test]
    fn test_base_is_rub() {
        assert_eq!(CurrencyCode::base().as_str(), BASE_CURRENCY);
    }

    #[test]
    fn test_display_round_trips() {
        let code: CurrencyCode = "eur".parse().unwrap();
        assert_eq!(code.to_string(), "EUR");
    }

    #[test]
    fn test_deserialization_normalizes() {
        let code: CurrencyCode = serde_json::from_str("\" eur \"").unwrap();
        assert_eq!(code.as_str(), "EUR");
        assert!(serde_json::from_str::<CurrencyCode>("\"  \"").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let code = CurrencyCode::parse("usd").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"USD\"");
    }
}
