// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! Lets a JSON object serve directly as a mapping dictionary. Nested objects
//! have no [`Value`] form, matching the single-level scope of the mapper.

use crate::{
    error::{MapperError, Result},
    value::{Dict, Value}
};

impl TryFrom<serde_json::Value> for Value {
    type Error = MapperError;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        Ok(match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<Vec<_>>>()?
            ),
            serde_json::Value::Object(_) => {
                return Err(MapperError::invalid_argument(
                    "nested JSON objects have no value representation"
                ));
            }
        })
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Int(i) => Self::from(i),
            Value::UInt(u) => Self::from(u),
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
            Value::Text(s) => Self::String(s),
            Value::List(items) => Self::Array(items.into_iter().map(Self::from).collect())
        }
    }
}

/// Build a [`Dict`] from a JSON object.
///
/// # Errors
///
/// [`MapperError::InvalidArgument`] when `json` is not an object or a member
/// is itself an object.
///
/// # Example
///
/// ```rust
/// use record_core::{Value, json::dict_from_json};
///
/// let dict = dict_from_json(serde_json::json!({ "user_name": "alice", "age": 30 }))?;
/// assert_eq!(dict["user_name"], Value::from("alice"));
/// assert_eq!(dict["age"], Value::Int(30));
/// # Ok::<(), record_core::MapperError>(())
/// ```
pub fn dict_from_json(json: serde_json::Value) -> Result<Dict> {
    let serde_json::Value::Object(members) = json else {
        return Err(MapperError::invalid_argument("expected a JSON object"));
    };
    members
        .into_iter()
        .map(|(key, value)| Value::try_from(value).map(|value| (key, value)))
        .collect()
}

/// Render a [`Dict`] as a JSON object.
pub fn dict_to_json(dict: Dict) -> serde_json::Value {
    serde_json::Value::Object(
        dict.into_iter()
            .map(|(key, value)| (key, serde_json::Value::from(value)))
            .collect()
    )
}
