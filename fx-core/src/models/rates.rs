use super::currency::{CurrencyCode, UnknownCurrency};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// An immutable table of currency rates, keyed by normalized code.
///
/// Each entry is the value of one unit of that currency expressed in the base
/// currency: `USD -> 92.5` means 1 USD = 92.5 RUB. The table is constructed
/// once at startup and only read afterwards, so it needs no synchronization.
///
/// Invariants held by construction:
/// - every key is a normalized [`CurrencyCode`];
/// - the base currency is always present (synthesized with rate 1.0 when the
///   source does not define it);
/// - every rate is strictly positive (the loader validates rows before they
///   reach this type).
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: IndexMap<CurrencyCode, f64, FxBuildHasher>,
}

impl RateTable {
    /// Build a table from `(code, rate)` pairs.
    ///
    /// Duplicate codes are resolved last-wins, matching a source that lists a
    /// currency twice and expects the later row to override the earlier one.
    pub fn new<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (CurrencyCode, f64)>,
    {
        let mut rates: IndexMap<CurrencyCode, f64, FxBuildHasher> = rates.into_iter().collect();
        debug_assert!(rates.values().all(|rate| *rate > 0.0));
        rates.entry(CurrencyCode::base()).or_insert(1.0);
        Self { rates }
    }

    /// The value of one unit of `code` in the base currency.
    ///
    /// Normalizes `code` first, so lookups accept raw user input.
    pub fn rate_to_base(&self, code: &str) -> Result<f64, UnknownCurrency> {
        self.rate(&CurrencyCode::parse(code)?)
    }

    /// Look up an already-normalized code.
    pub fn rate(&self, code: &CurrencyCode) -> Result<f64, UnknownCurrency> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| UnknownCurrency::Missing(code.as_str().to_string()))
    }

    /// Whether the table has a rate for `code`.
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// Number of currencies in the table (always at least the base).
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table is empty; never true, since the base is synthesized.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate codes and rates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, f64)> {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }
}

impl Default for RateTable {
    /// A table holding only the base currency at rate 1.0.
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl FromIterator<(CurrencyCode, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, f64)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    #[test]
    fn test_base_synthesized_when_absent() {
        let table = RateTable::new([(code("USD"), 92.5)]);
        assert_eq!(table.rate_to_base("RUB").unwrap(), 1.0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_base_not_overwritten_when_present() {
        let table = RateTable::new([(code("RUB"), 1.0), (code("USD"), 92.5)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rate_to_base("rub").unwrap(), 1.0);
    }

    #[test]
    fn test_lookup_normalizes_input() {
        let table = RateTable::new([(code("USD"), 92.5)]);
        assert_eq!(table.rate_to_base(" usd ").unwrap(), 92.5);
    }

    #[test]
    fn test_unknown_code() {
        let table = RateTable::default();
        assert_eq!(
            table.rate_to_base("AAA").unwrap_err(),
            UnknownCurrency::Missing("AAA".to_string())
        );
        assert_eq!(table.rate_to_base("").unwrap_err(), UnknownCurrency::Empty);
    }

    #[test]
    fn test_duplicate_codes_last_wins() {
        let table = RateTable::new([(code("USD"), 90.0), (code("USD"), 92.5)]);
        assert_eq!(table.rate_to_base("USD").unwrap(), 92.5);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let table = RateTable::new([(code("RUB"), 1.0), (code("USD"), 92.5), (code("EUR"), 100.2)]);
        let codes: Vec<&str> = table.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, ["RUB", "USD", "EUR"]);
    }
}
