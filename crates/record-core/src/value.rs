// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed values for the untyped dictionary boundary.
//!
//! Record fields are statically typed, dictionaries are not. [`Value`] is the
//! tagged union that crosses between the two, and [`FieldValue`] is the
//! per-type conversion table that decides which values a field accepts.
//!
//! # Conversion Table
//!
//! | Field type | Accepts | Produces |
//! |------------|---------|----------|
//! | `bool` | `Bool` | `Bool` |
//! | `i8`..`i64`, `isize` | `Int`, `UInt` in range | `Int` |
//! | `u8`..`u64`, `usize` | `Int`, `UInt` in range | `UInt` |
//! | `f64` | `Float` | `Float` |
//! | `f32` | `Float` exactly representable as `f32` | `Float` |
//! | `char` | `Text` of exactly one character | `Text` |
//! | `String` | `Text` | `Text` |
//! | `Vec<T>` | `List` where every element converts to `T` | `List` |
//! | `Option<T>` | `Null`, or anything `T` accepts | `Null` or `T`'s value |
//! | `Value` | anything | itself |
//!
//! Everything else is a [`MapperError::TypeMismatch`]. Nothing is coerced
//! across kinds: `Text("1")` never becomes an integer.

use std::{collections::HashMap, fmt};

use crate::error::MapperError;

/// Dictionary interchange format.
///
/// Keys are storage column names as produced by a
/// [`NamingStrategy`](crate::NamingStrategy).
pub type Dict = HashMap<String, Value>;

/// Dynamically typed field value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Absent value. Produced by `None`.
    #[default]
    Null,

    /// Boolean.
    Bool(bool),

    /// Signed integer.
    Int(i64),

    /// Unsigned integer.
    UInt(u64),

    /// Floating point number.
    Float(f64),

    /// UTF-8 text.
    Text(String),

    /// Homogeneous sequence.
    List(Vec<Value>)
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::Int`].
    Int,
    /// [`Value::UInt`].
    UInt,
    /// [`Value::Float`].
    Float,
    /// [`Value::Text`].
    Text,
    /// [`Value::List`].
    List
}

impl ValueKind {
    /// Lowercase name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list"
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Get the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::UInt(_) => ValueKind::UInt,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List
        }
    }

    /// Check if this is [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the text content, if this is [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// Conversion between a field type and [`Value`].
///
/// Every field a `#[derive(Record)]` struct exposes must implement this
/// trait. `Clone` backs field copying, `PartialEq` backs diffing, and
/// `'static` backs the type identity check that decides whether two fields
/// are the same type.
///
/// # Example
///
/// ```rust
/// use record_core::{FieldValue, Value};
///
/// assert_eq!(42_u8.to_value(), Value::UInt(42));
/// assert_eq!(u8::from_value(Value::Int(7)), Some(7));
/// assert_eq!(u8::from_value(Value::Int(-1)), None);
/// assert_eq!(Option::<String>::None.to_value(), Value::Null);
/// ```
pub trait FieldValue: Clone + PartialEq + 'static {
    /// Produce the dynamic form of this value.
    ///
    /// `Option` unwraps exactly one level: `None` becomes [`Value::Null`],
    /// `Some(v)` becomes `v`'s value.
    fn to_value(&self) -> Value;

    /// Convert a dynamic value into this type.
    ///
    /// Returns `None` when the conversion table has no entry for the value.
    fn from_value(value: Value) -> Option<Self>;
}

/// Convert `value` into the type of `field`.
///
/// Used by generated `set_field` implementations so that the error names the
/// field being assigned.
///
/// # Errors
///
/// [`MapperError::TypeMismatch`] when `T` does not accept the value.
pub fn convert<T: FieldValue>(field: &'static str, value: Value) -> Result<T, MapperError> {
    let found = value.kind();
    T::from_value(value)
        .ok_or_else(|| MapperError::type_mismatch(field, std::any::type_name::<T>(), found))
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Option<Self> {
        Some(value)
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None
        }
    }
}

macro_rules! signed_field_value {
    ($($ty:ty),*) => {$(
        impl FieldValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(*self as i64)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::Int(v) => <$ty>::try_from(v).ok(),
                    Value::UInt(v) => <$ty>::try_from(v).ok(),
                    _ => None
                }
            }
        }
    )*};
}

macro_rules! unsigned_field_value {
    ($($ty:ty),*) => {$(
        impl FieldValue for $ty {
            fn to_value(&self) -> Value {
                Value::UInt(*self as u64)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::Int(v) => <$ty>::try_from(v).ok(),
                    Value::UInt(v) => <$ty>::try_from(v).ok(),
                    _ => None
                }
            }
        }
    )*};
}

signed_field_value!(i8, i16, i32, i64, isize);
unsigned_field_value!(u8, u16, u32, u64, usize);

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(v),
            _ => None
        }
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(v) => {
                let narrowed = v as f32;
                (v.is_nan() || f64::from(narrowed) == v).then_some(narrowed)
            }
            _ => None
        }
    }
}

impl FieldValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }

    fn from_value(value: Value) -> Option<Self> {
        let Value::Text(text) = value else {
            return None;
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None
        }
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v),
            _ => None
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some)
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind().as_str(), "null");
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::from(vec![1_i64, 2]).kind(), ValueKind::List);
        assert_eq!(ValueKind::UInt.to_string(), "uint");
    }

    #[test]
    fn option_unwraps_one_level() {
        assert_eq!(Some(5_i32).to_value(), Value::Int(5));
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(Some(None::<i32>).to_value(), Value::Null);
    }

    #[test]
    fn option_accepts_null_and_inner() {
        assert_eq!(Option::<String>::from_value(Value::Null), Some(None));
        assert_eq!(
            Option::<String>::from_value(Value::from("a")),
            Some(Some("a".to_string()))
        );
        assert_eq!(Option::<String>::from_value(Value::Bool(true)), None);
    }

    #[test]
    fn integers_convert_only_in_range() {
        assert_eq!(i8::from_value(Value::Int(127)), Some(127));
        assert_eq!(i8::from_value(Value::Int(128)), None);
        assert_eq!(i64::from_value(Value::UInt(u64::MAX)), None);
        assert_eq!(u64::from_value(Value::UInt(u64::MAX)), Some(u64::MAX));
        assert_eq!(u32::from_value(Value::Int(-3)), None);
        assert_eq!(usize::from_value(Value::Int(9)), Some(9));
    }

    #[test]
    fn no_cross_kind_coercion() {
        assert_eq!(i64::from_value(Value::from("1")), None);
        assert_eq!(String::from_value(Value::Int(1)), None);
        assert_eq!(f64::from_value(Value::Int(1)), None);
        assert_eq!(bool::from_value(Value::UInt(1)), None);
    }

    #[test]
    fn f32_requires_exact_value() {
        assert_eq!(f32::from_value(Value::Float(1.5)), Some(1.5));
        assert_eq!(f32::from_value(Value::Float(0.1)), None);
        assert_eq!(f32::from_value(0.25_f32.to_value()), Some(0.25));
    }

    #[test]
    fn char_requires_single_character() {
        assert_eq!(char::from_value(Value::from("z")), Some('z'));
        assert_eq!(char::from_value(Value::from("zz")), None);
        assert_eq!(char::from_value(Value::from("")), None);
    }

    #[test]
    fn list_fails_on_any_bad_element() {
        let good = Value::List(vec![Value::Int(1), Value::UInt(2)]);
        assert_eq!(Vec::<u16>::from_value(good), Some(vec![1, 2]));

        let bad = Value::List(vec![Value::Int(1), Value::from("two")]);
        assert_eq!(Vec::<u16>::from_value(bad), None);
    }

    #[test]
    fn convert_reports_field_and_kinds() {
        let err = convert::<i32>("age", Value::from("ten")).unwrap_err();
        assert_eq!(
            err,
            MapperError::TypeMismatch {
                field:    "age",
                expected: "i32",
                found:    ValueKind::Text
            }
        );
    }

    #[test]
    fn value_is_its_own_field_value() {
        let v = Value::List(vec![Value::Null, Value::Bool(false)]);
        assert_eq!(Value::from_value(v.clone()), Some(v.clone()));
        assert_eq!(v.to_value(), v);
    }
}
