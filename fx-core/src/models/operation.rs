use super::currency::CurrencyCode;
use time::OffsetDateTime;

/// Unique identifier for a recorded conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct OperationId(pub uuid::Uuid);

impl OperationId {
    /// Generate a fresh random id.
    pub(crate) fn random() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl From<uuid::Uuid> for OperationId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl From<OperationId> for uuid::Uuid {
    fn from(value: OperationId) -> Self {
        value.0
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for OperationId {
    type Err = <uuid::Uuid as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// An immutable record of one completed conversion.
///
/// Created by [`super::OperationLog::add`] the moment a conversion succeeds
/// and never modified afterwards; the log hands out owned copies, so a record
/// obtained from a listing stays valid after the log is cleared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Operation {
    /// Unique id of this operation
    pub id: OperationId,
    /// UTC instant the conversion was recorded, RFC3339 on the wire
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    #[cfg_attr(feature = "schemars", schemars(schema_with = "time_schema"))]
    pub ts: OffsetDateTime,
    /// Normalized source currency
    #[cfg_attr(feature = "serde", serde(rename = "from"))]
    pub from_currency: CurrencyCode,
    /// Normalized target currency
    #[cfg_attr(feature = "serde", serde(rename = "to"))]
    pub to_currency: CurrencyCode,
    /// Converted amount, in units of the source currency
    pub amount: f64,
    /// Applied rate, rounded to 6 decimal places
    pub rate: f64,
    /// Resulting amount in the target currency, rounded to 2 decimal places
    pub result: f64,
}

#[cfg(feature = "schemars")]
fn time_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "format": "date-time",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OperationLog;

    #[test]
    fn test_id_display_parse_round_trip() {
        let id = OperationId::random();
        let parsed: OperationId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_wire_format() {
        let log = OperationLog::new();
        let operation = log.add(
            CurrencyCode::parse("USD").unwrap(),
            CurrencyCode::parse("RUB").unwrap(),
            10.0,
            92.5,
            925.0,
        );

        let value = serde_json::to_value(&operation).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["amount", "from", "id", "rate", "result", "to", "ts"]);
        assert_eq!(object["from"], "USD");
        assert_eq!(object["to"], "RUB");
        assert_eq!(object["amount"], 10.0);

        // RFC3339 timestamps parse back to the same instant
        let round_trip: Operation = serde_json::from_value(value).unwrap();
        assert_eq!(round_trip.id, operation.id);
        assert_eq!(round_trip.ts, operation.ts);
    }
}
