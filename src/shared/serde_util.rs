//! Custom serde helpers for backend wire formats.

/// Deserializes a monetary amount into `Decimal` from either a JSON number or
/// a numeric string.
///
/// The backend serializes `Numeric(10, 2)` columns as JSON floats (`12.5`).
/// The decimal is built from the number's textual form, so `12.5` becomes
/// exactly `12.5` rather than the nearest binary fraction.
pub mod decimal_lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(serde_json::Number),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Raw::deserialize(deserializer)? {
            Raw::Num(n) => n.to_string(),
            Raw::Str(s) => s,
        };
        parse(&text).ok_or_else(|| serde::de::Error::custom(format!("Invalid amount: {}", text)))
    }

    pub(crate) fn parse(text: &str) -> Option<Decimal> {
        let text = text.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
    }
}

/// Deserializes an ISO 8601 timestamp into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (`2025-07-25T12:00:00Z`, with offset) and the naive form
/// Python's `isoformat()` emits for UTC columns (`2025-07-25T12:00:00.123456`),
/// which is interpreted as UTC.
pub mod timestamp_iso {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", s)))
    }

    pub(crate) fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}
