// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record shape: field descriptors and the traits generated by
//! `#[derive(Record)]`.
//!
//! # Architecture
//!
//! ```text
//! RecordType (static, per type)        Record (object safe, per value)
//! ├── NAME                             ├── record_name()
//! └── descriptors() ──────────────────►├── field_descriptors()
//!                                      ├── field_any() / field_value()
//!                                      └── assign_field() / set_field()
//! ```
//!
//! Mapper operations work on `&dyn Record`, so one compiled function serves
//! every record type. `RecordType` is what lets callers name a shape without
//! holding a value, and what the registry uses to build its casters.

use std::any::{Any, TypeId};

use crate::{error::Result, value::Value};

/// Metadata about one declared field.
///
/// Built fresh by [`RecordType::descriptors`] on every call. Holds no
/// reference into any record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Position in declaration order.
    pub index:     usize,
    /// Declared field name.
    pub name:      &'static str,
    /// Rust type name, for diagnostics only.
    pub type_name: &'static str,
    /// Type identity used to decide whether two fields share a type.
    pub type_id:   TypeId,
    /// Raw annotation: comma-separated `key:value` pairs.
    pub tag:       Option<&'static str>,
    /// Whether copy and dictionary mapping may write this field.
    pub writable:  bool
}

impl FieldDescriptor {
    /// Describe a writable field of type `T` with no tag.
    pub fn new<T: 'static>(index: usize, name: &'static str) -> Self {
        Self {
            index,
            name,
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            tag: None,
            writable: true
        }
    }

    /// Attach a raw tag such as `"column:user_name,size:64"`.
    #[must_use]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Mark the field as read-only.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Look up a key in the tag.
    ///
    /// The tag is split on `,`, each part on every `:`; the piece after the
    /// first `:` is the value, so `column:a:b` yields `a`. The first part
    /// whose key matches and whose value is non-empty wins. Parts without a
    /// `:` are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_core::FieldDescriptor;
    ///
    /// let field = FieldDescriptor::new::<String>(0, "name").with_tag("size:64,column:user_name");
    /// assert_eq!(field.tag_value("column"), Some("user_name"));
    /// assert_eq!(field.tag_value("size"), Some("64"));
    /// assert_eq!(field.tag_value("index"), None);
    /// ```
    pub fn tag_value(&self, key: &str) -> Option<&'static str> {
        self.tag?
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.split(':');
                Some((pieces.next()?, pieces.next()?))
            })
            .find(|(k, v)| *k == key && !v.is_empty())
            .map(|(_, v)| v)
    }

    /// Explicit storage column from a `column:<name>` tag entry.
    pub fn column_override(&self) -> Option<&'static str> {
        self.tag_value("column")
    }

    /// Check if both fields have the same Rust type.
    pub fn same_type(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

/// Object-safe record access.
///
/// Normally generated by `#[derive(Record)]`. Manual implementations must
/// keep every method consistent with [`field_descriptors`]: each accessor
/// answers for exactly the described names, and the mutating accessors
/// refuse fields that are not writable.
///
/// [`field_descriptors`]: Record::field_descriptors
pub trait Record: Any {
    /// Declared type name, e.g. `"User"`.
    fn record_name(&self) -> &'static str;

    /// Field descriptors in declaration order.
    fn field_descriptors(&self) -> Vec<FieldDescriptor>;

    /// Borrow a field as `Any`.
    fn field_any(&self, name: &str) -> Option<&dyn Any>;

    /// Read a field as a [`Value`].
    fn field_value(&self, name: &str) -> Option<Value>;

    /// Compare a field with `other` using the field type's `PartialEq`.
    ///
    /// Returns `None` when the field is unknown or `other` is not the
    /// field's exact type.
    fn field_eq(&self, name: &str, other: &dyn Any) -> Option<bool>;

    /// Overwrite a field with a clone of `src`.
    ///
    /// Returns `false` when the field is unknown, read-only, or `src` is not
    /// the field's exact type.
    fn assign_field(&mut self, name: &str, src: &dyn Any) -> bool;

    /// Overwrite a field from a [`Value`].
    ///
    /// Returns `Ok(false)` when the field is unknown or read-only.
    ///
    /// # Errors
    ///
    /// [`MapperError::TypeMismatch`](crate::MapperError::TypeMismatch) when
    /// the value does not convert into the field type.
    fn set_field(&mut self, name: &str, value: Value) -> Result<bool>;
}

/// Static side of a record: its name and shape without a value.
pub trait RecordType: Record + Sized {
    /// Declared type name.
    const NAME: &'static str;

    /// Field descriptors in declaration order.
    fn descriptors() -> Vec<FieldDescriptor>;
}
