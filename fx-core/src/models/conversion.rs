use super::currency::{CurrencyCode, UnknownCurrency};
use super::rates::RateTable;

/// The outcome of a single conversion.
///
/// Produced by [`CurrencyConverter::convert`] and consumed immediately to
/// build an operation record; it is not persisted on its own.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionResult {
    /// Normalized source currency
    pub from_currency: CurrencyCode,
    /// Normalized target currency
    pub to_currency: CurrencyCode,
    /// The converted amount, in units of the source currency
    pub amount: f64,
    /// Value of 1 unit of `from_currency` in `to_currency`, rounded to 6
    /// decimal places
    pub rate: f64,
    /// `amount` times the unrounded rate, rounded to 2 decimal places
    pub result: f64,
}

/// Converts amounts between currencies through the base currency.
///
/// A pure function object over a [`RateTable`]: no side effects, no interior
/// state, safe to share behind an `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rates: RateTable,
}

impl CurrencyConverter {
    /// Create a converter over the given table.
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// The table this converter prices against.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Convert `amount` units of `from` into `to`.
    ///
    /// Both codes are normalized before lookup. The cross rate goes through
    /// the base currency: `rate = rate_to_base(from) / rate_to_base(to)`.
    /// The returned `result` is computed from the unrounded rate, then both
    /// fields are rounded half-to-even for the output record (2 decimal
    /// places for the monetary result, 6 for the rate).
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidAmount`] if `amount` is not finite or not
    ///   strictly positive
    /// - [`ConvertError::UnknownCurrency`] if either code is empty or absent
    ///   from the table
    pub fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, ConvertError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConvertError::InvalidAmount(amount));
        }

        let from = CurrencyCode::parse(from)?;
        let to = CurrencyCode::parse(to)?;

        // 1 FROM -> base -> TO
        let rate = self.rates.rate(&from)? / self.rates.rate(&to)?;
        let result = amount * rate;

        Ok(ConversionResult {
            from_currency: from,
            to_currency: to,
            amount,
            rate: round_to(rate, 6),
            result: round_to(result, 2),
        })
    }
}

/// Round half-to-even at `decimals` fractional digits.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Errors that can occur when converting an amount.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// The amount was zero, negative, or not a finite number
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
    /// A currency code could not be resolved against the rate table
    #[error(transparent)]
    UnknownCurrency(#[from] UnknownCurrency),
}
