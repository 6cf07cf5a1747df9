// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level operations over records.
//!
//! Every function is a single pass over freshly built descriptors. Nothing is
//! cached and no reference outlives the call.
//!
//! | Operation | Purpose |
//! |-----------|---------|
//! | [`assign`] | Copy same-name, same-type fields between two records |
//! | [`diff`] | Field-level difference of two records of one type |
//! | [`fields`] | Declared field names |
//! | [`fields_diff`] | Changed fields that a reference record also declares |
//! | [`column_name`] | Storage column for a field |
//! | [`map_from_dict`] | Fill a record from a dictionary, leaving it intact |
//! | [`map_from_dict_using_namer`] | Fill a record, consuming matched keys |
//! | [`get_name`] | Declared type name |

use std::{
    any::Any,
    collections::{HashMap, HashSet}
};

use tracing::{debug, trace};

use crate::{
    error::{MapperError, Result},
    naming::NamingStrategy,
    record::{FieldDescriptor, Record, RecordType},
    value::{Dict, Value}
};

/// Field-level difference between two records.
///
/// `fields` lists changed field names in declaration order; `values` maps
/// each of them to the destination's value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diff {
    /// Destination value of every changed field.
    pub values: HashMap<&'static str, Value>,
    /// Changed field names in declaration order.
    pub fields: Vec<&'static str>
}

impl Diff {
    /// Check if no field changed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of changed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Destination value of a changed field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Check if a field changed.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Changed fields with their destination values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.fields
            .iter()
            .filter_map(|name| self.values.get(name).map(|value| (*name, value)))
    }

    fn push(&mut self, field: &'static str, value: Value) {
        self.fields.push(field);
        self.values.insert(field, value);
    }
}

/// Copy fields from `src` into `dst`.
///
/// A field is copied when both records declare it under the same name with
/// the same type and the destination field is writable. Everything else is
/// skipped silently. Returns the number of copied fields.
///
/// # Example
///
/// ```rust,ignore
/// let mut user = User::default();
/// let copied = assign(&mut user, &form);
/// ```
pub fn assign(dst: &mut dyn Record, src: &dyn Record) -> usize {
    let sources = src.field_descriptors();
    let mut copied = 0;

    for field in dst.field_descriptors() {
        if !field.writable {
            trace!(record = dst.record_name(), field = field.name, "skip read-only field");
            continue;
        }
        let Some(source) = sources.iter().find(|s| s.name == field.name) else {
            continue;
        };
        if !source.same_type(&field) {
            trace!(
                record = dst.record_name(),
                field = field.name,
                dst_type = field.type_name,
                src_type = source.type_name,
                "skip field with different type"
            );
            continue;
        }
        let Some(value) = src.field_any(field.name) else {
            continue;
        };
        if dst.assign_field(field.name, value) {
            copied += 1;
        }
    }

    debug!(
        dst = dst.record_name(),
        src = src.record_name(),
        copied,
        "assigned fields"
    );
    copied
}

/// Compute the field-level difference of two records of the same type.
///
/// A field differs when the field type's `PartialEq` says the two values are
/// not equal, so `Some(None)` and `None` differ on an `Option<Option<T>>`.
/// The reported value is the destination field as a [`Value`].
///
/// # Errors
///
/// [`MapperError::InvalidArgument`] when `dst` and `src` are different types.
pub fn diff(dst: &dyn Record, src: &dyn Record) -> Result<Diff> {
    ensure_same_type(dst, src)?;

    let mut result = Diff::default();
    for field in dst.field_descriptors() {
        let Some(theirs) = src.field_any(field.name) else {
            continue;
        };
        if dst.field_eq(field.name, theirs) != Some(false) {
            continue;
        }
        if let Some(value) = dst.field_value(field.name) {
            result.push(field.name, value);
        }
    }

    debug!(record = dst.record_name(), changed = result.len(), "computed diff");
    Ok(result)
}

/// Declared field names of a record, in declaration order.
pub fn fields(dst: &dyn Record) -> Vec<&'static str> {
    dst.field_descriptors().iter().map(|f| f.name).collect()
}

/// Declared field names of a record type, in declaration order.
pub fn fields_of<T: RecordType>() -> Vec<&'static str> {
    T::descriptors().iter().map(|f| f.name).collect()
}

/// Changed fields that `reference` also declares.
///
/// Typical use is restricting an update to the fields an update form
/// exposes. Order follows [`diff`].
///
/// # Errors
///
/// Propagates [`diff`] errors unchanged.
pub fn fields_diff(
    dst: &dyn Record,
    src: &dyn Record,
    reference: &dyn Record
) -> Result<Vec<&'static str>> {
    let changed = diff(dst, src)?.fields;
    if changed.is_empty() {
        return Ok(changed);
    }
    Ok(intersect(changed, &fields(reference)))
}

/// [`fields_diff`] with the reference given as a type.
///
/// # Errors
///
/// Propagates [`diff`] errors unchanged.
pub fn fields_diff_of<T: RecordType>(
    dst: &dyn Record,
    src: &dyn Record
) -> Result<Vec<&'static str>> {
    let changed = diff(dst, src)?.fields;
    Ok(intersect(changed, &fields_of::<T>()))
}

/// Storage column for a field.
///
/// A `column:<name>` tag entry wins; otherwise the naming strategy decides,
/// called with an empty table name.
pub fn column_name<N>(field: &FieldDescriptor, naming: &N) -> String
where
    N: NamingStrategy + ?Sized
{
    match field.column_override() {
        Some(column) => column.to_owned(),
        None => naming.column_name("", field.name)
    }
}

/// Fill `dst` from a dictionary keyed by column name.
///
/// Walks writable fields in declaration order. When a field's column is
/// present in `dict`, the value is converted and stored. The dictionary is
/// not modified. If two fields resolve to the same column, only the first
/// receives the value. Returns the number of fields set.
///
/// # Errors
///
/// [`MapperError::TypeMismatch`] when a value does not fit its field. Fields
/// set before the failing one keep their new values.
pub fn map_from_dict<N>(naming: &N, dict: &Dict, dst: &mut dyn Record) -> Result<usize>
where
    N: NamingStrategy + ?Sized
{
    let mut claimed = HashSet::new();
    let mut set = 0;

    for field in dst.field_descriptors() {
        if !field.writable {
            continue;
        }
        let column = column_name(&field, naming);
        if claimed.contains(&column) {
            trace!(field = field.name, column = %column, "column already claimed");
            continue;
        }
        let Some(value) = dict.get(&column) else {
            continue;
        };
        if dst.set_field(field.name, value.clone())? {
            set += 1;
        }
        claimed.insert(column);
    }

    debug!(record = dst.record_name(), set, keys = dict.len(), "mapped dictionary");
    Ok(set)
}

/// Fill `dst` from a dictionary, consuming the keys it uses.
///
/// Same walk as [`map_from_dict`], but every matched key is removed and the
/// residual dictionary is returned so callers can see what was not mapped.
///
/// # Errors
///
/// [`MapperError::TypeMismatch`] when a value does not fit its field. The
/// dictionary is consumed either way, so on error the residual is lost.
/// Fields set before the failing one keep their new values. Pass a clone, or
/// use [`map_from_dict`], when the keys must survive a failed mapping.
///
/// # Example
///
/// ```rust,ignore
/// let rest = map_from_dict_using_namer(row, &mut user, &SnakeCaseNamer::new())?;
/// assert!(rest.is_empty(), "unmapped columns: {:?}", rest.keys());
/// ```
pub fn map_from_dict_using_namer<N>(mut dict: Dict, dst: &mut dyn Record, naming: &N) -> Result<Dict>
where
    N: NamingStrategy + ?Sized
{
    let mut consumed = 0;

    for field in dst.field_descriptors() {
        if !field.writable {
            continue;
        }
        let column = column_name(&field, naming);
        let Some(value) = dict.remove(&column) else {
            continue;
        };
        dst.set_field(field.name, value)?;
        consumed += 1;
    }

    debug!(
        record = dst.record_name(),
        consumed,
        residual = dict.len(),
        "mapped dictionary"
    );
    Ok(dict)
}

/// Declared type name of a record.
pub fn get_name(src: &dyn Record) -> &'static str {
    src.record_name()
}

fn ensure_same_type(dst: &dyn Record, src: &dyn Record) -> Result<()> {
    let (left, right): (&dyn Any, &dyn Any) = (dst, src);
    if left.type_id() == right.type_id() {
        return Ok(());
    }
    Err(MapperError::invalid_argument(format!(
        "cannot diff `{}` against `{}`: both must be the same record type",
        dst.record_name(),
        src.record_name()
    )))
}

fn intersect(changed: Vec<&'static str>, allowed: &[&'static str]) -> Vec<&'static str> {
    changed
        .into_iter()
        .filter(|name| allowed.contains(name))
        .collect()
}
