// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! [`FieldValue`] for common foreign field types.
//!
//! The orphan rule keeps users from implementing [`FieldValue`] for types
//! they do not own, so the usual identifier and timestamp types are covered
//! here behind features. All of them travel as [`Value::Text`].
//!
//! | Feature | Type | Text form |
//! |---------|------|-----------|
//! | `uuid` | `uuid::Uuid` | hyphenated, lower case |
//! | `chrono` | `DateTime<Utc>`, `DateTime<FixedOffset>` | RFC 3339 |
//! | `chrono` | `NaiveDate` | `YYYY-MM-DD` |

#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::value::{FieldValue, Value};

#[cfg(feature = "uuid")]
impl FieldValue for uuid::Uuid {
    fn to_value(&self) -> Value {
        Value::Text(self.hyphenated().to_string())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(text) => Self::parse_str(&text).ok(),
            _ => None
        }
    }
}

#[cfg(feature = "chrono")]
impl FieldValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Text(self.to_rfc3339())
    }

    /// Any RFC 3339 offset is accepted and normalized to UTC.
    fn from_value(value: Value) -> Option<Self> {
        DateTime::<FixedOffset>::from_value(value).map(|at| at.with_timezone(&Utc))
    }
}

#[cfg(feature = "chrono")]
impl FieldValue for DateTime<FixedOffset> {
    fn to_value(&self) -> Value {
        Value::Text(self.to_rfc3339())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(text) => Self::parse_from_rfc3339(&text).ok(),
            _ => None
        }
    }
}

#[cfg(feature = "chrono")]
impl FieldValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Text(self.format("%Y-%m-%d").to_string())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(text) => Self::parse_from_str(&text, "%Y-%m-%d").ok(),
            _ => None
        }
    }
}
