// ABOUTME: Lenient timestamp deserialization for backend datetimes
// ABOUTME: Accepts RFC 3339 and naive ISO-8601 values, treating naive ones as UTC
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The backend serializes naive datetimes (`2025-03-01T08:15:00.123456`)
//! without an offset. Use with `#[serde(with = "timestamp")]`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a backend timestamp
///
/// # Errors
///
/// Returns the chrono parse error when the value is neither RFC 3339 nor naive ISO-8601
pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(value, NAIVE_FORMAT).map(|naive| naive.and_utc()))
}

/// Serialize as RFC 3339
///
/// # Errors
///
/// Propagates serializer errors
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

/// Deserialize from RFC 3339 or naive ISO-8601
///
/// # Errors
///
/// Fails when the string is not a recognized timestamp
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}

/// Same as the parent module for `Option<DateTime<Utc>>` fields
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as RFC 3339 or null
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&value.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional timestamp
    ///
    /// # Errors
    ///
    /// Fails when a present value is not a recognized timestamp
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|raw| {
            super::parse(&raw)
                .map_err(|e| de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
        })
        .transpose()
    }
}
