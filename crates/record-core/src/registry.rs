// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic entry point for values only known as `dyn Any`.
//!
//! Code that receives records through type-erased plumbing (plugin
//! boundaries, heterogeneous queues, `Box<dyn Any>` payloads) cannot name a
//! [`Record`] type. A [`RecordRegistry`] built once at startup maps each
//! registered `TypeId` to casters that recover `&dyn Record`, and exposes the
//! mapper operations over `&dyn Any`.
//!
//! Both `T` and `Box<T>` resolve to the same record, so one level of
//! indirection is followed.
//!
//! # Example
//!
//! ```rust,ignore
//! let registry = RecordRegistry::new().register::<User>().register::<UserForm>();
//!
//! let payload: Box<dyn Any> = Box::new(form);
//! registry.assign(&mut user, payload.as_ref())?;
//!
//! let unknown = 42_u32;
//! assert!(registry.assign(&mut user, &unknown).is_err());
//! ```

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt
};

use tracing::debug;

use crate::{
    error::{MapperError, Result},
    mapper::{self, Diff},
    naming::NamingStrategy,
    record::{Record, RecordType},
    value::Dict
};

type Cast = fn(&dyn Any) -> Option<&dyn Record>;
type CastMut = fn(&mut dyn Any) -> Option<&mut dyn Record>;

#[derive(Clone, Copy)]
struct Entry {
    name:     &'static str,
    cast:     Cast,
    cast_mut: CastMut
}

fn cast<T: RecordType>(value: &dyn Any) -> Option<&dyn Record> {
    if let Some(record) = value.downcast_ref::<T>() {
        return Some(record);
    }
    value
        .downcast_ref::<Box<T>>()
        .map(|boxed| boxed.as_ref() as &dyn Record)
}

fn cast_mut<T: RecordType>(value: &mut dyn Any) -> Option<&mut dyn Record> {
    if value.is::<T>() {
        return value.downcast_mut::<T>().map(|record| record as &mut dyn Record);
    }
    value
        .downcast_mut::<Box<T>>()
        .map(|boxed| boxed.as_mut() as &mut dyn Record)
}

/// Registry of record types addressable through `dyn Any`.
///
/// Immutable once built, so it can be shared between threads freely.
#[derive(Clone, Default)]
pub struct RecordRegistry {
    entries: HashMap<TypeId, Entry>
}

impl fmt::Debug for RecordRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.values().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        f.debug_struct("RecordRegistry")
            .field("records", &names)
            .finish()
    }
}

impl RecordRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`, builder style.
    #[must_use]
    pub fn register<T: RecordType>(mut self) -> Self {
        self.insert::<T>();
        self
    }

    /// Register `T` in place.
    ///
    /// Registering a type twice is harmless.
    pub fn insert<T: RecordType>(&mut self) {
        let entry = Entry {
            name:     T::NAME,
            cast:     cast::<T>,
            cast_mut: cast_mut::<T>
        };
        self.entries.insert(TypeId::of::<T>(), entry);
        self.entries.insert(TypeId::of::<Box<T>>(), entry);
        debug!(record = T::NAME, "registered record type");
    }

    /// Number of registered record types.
    pub fn len(&self) -> usize {
        self.entries.len() / 2
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if `value` resolves to a registered record.
    pub fn contains(&self, value: &dyn Any) -> bool {
        self.entries.contains_key(&value.type_id())
    }

    /// Resolve a value to its record view.
    ///
    /// # Errors
    ///
    /// [`MapperError::InvalidArgument`] when the value's type is not
    /// registered.
    pub fn resolve<'a>(&self, value: &'a dyn Any) -> Result<&'a dyn Record> {
        self.entries
            .get(&value.type_id())
            .and_then(|entry| (entry.cast)(value))
            .ok_or_else(|| MapperError::invalid_argument("value is not a registered record"))
    }

    /// Resolve a value to its mutable record view.
    ///
    /// # Errors
    ///
    /// [`MapperError::InvalidArgument`] when the value's type is not
    /// registered.
    pub fn resolve_mut<'a>(&self, value: &'a mut dyn Any) -> Result<&'a mut dyn Record> {
        let Some(entry) = self.entries.get(&(*value).type_id()) else {
            return Err(MapperError::invalid_argument(
                "destination is not a registered record"
            ));
        };
        (entry.cast_mut)(value)
            .ok_or_else(|| MapperError::invalid_argument("destination is not a registered record"))
    }

    /// [`mapper::assign`] over type-erased values.
    ///
    /// # Errors
    ///
    /// [`MapperError::InvalidArgument`] when either side is not a registered
    /// record.
    pub fn assign(&self, dst: &mut dyn Any, src: &dyn Any) -> Result<usize> {
        let src = self.resolve(src)?;
        let dst = self.resolve_mut(dst)?;
        Ok(mapper::assign(dst, src))
    }

    /// [`mapper::diff`] over type-erased values.
    ///
    /// # Errors
    ///
    /// [`MapperError::InvalidArgument`] when either side is not a registered
    /// record or the two are different record types.
    pub fn diff(&self, dst: &dyn Any, src: &dyn Any) -> Result<Diff> {
        mapper::diff(self.resolve(dst)?, self.resolve(src)?)
    }

    /// [`mapper::fields`] over a type-erased value.
    ///
    /// # Errors
    ///
    /// [`MapperError::InvalidArgument`] when the value is not a registered
    /// record.
    pub fn fields(&self, dst: &dyn Any) -> Result<Vec<&'static str>> {
        Ok(mapper::fields(self.resolve(dst)?))
    }

    /// [`mapper::fields_diff`] over type-erased values.
    ///
    /// # Errors
    ///
    /// Same as [`RecordRegistry::diff`], plus an unregistered `reference`.
    pub fn fields_diff(
        &self,
        dst: &dyn Any,
        src: &dyn Any,
        reference: &dyn Any
    ) -> Result<Vec<&'static str>> {
        let changed = self.diff(dst, src)?.fields;
        if changed.is_empty() {
            return Ok(changed);
        }
        let allowed = self.fields(reference)?;
        Ok(changed
            .into_iter()
            .filter(|name| allowed.contains(name))
            .collect())
    }

    /// [`mapper::map_from_dict`] into a type-erased destination.
    ///
    /// # Errors
    ///
    /// [`MapperError::InvalidArgument`] for an unregistered destination,
    /// [`MapperError::TypeMismatch`] for an incompatible value.
    pub fn map_from_dict<N>(&self, naming: &N, dict: &Dict, dst: &mut dyn Any) -> Result<usize>
    where
        N: NamingStrategy + ?Sized
    {
        mapper::map_from_dict(naming, dict, self.resolve_mut(dst)?)
    }

    /// [`mapper::map_from_dict_using_namer`] into a type-erased destination.
    ///
    /// # Errors
    ///
    /// [`MapperError::InvalidArgument`] for an unregistered destination,
    /// [`MapperError::TypeMismatch`] for an incompatible value. The
    /// dictionary is dropped in both cases.
    pub fn map_from_dict_using_namer<N>(
        &self,
        dict: Dict,
        dst: &mut dyn Any,
        naming: &N
    ) -> Result<Dict>
    where
        N: NamingStrategy + ?Sized
    {
        mapper::map_from_dict_using_namer(dict, self.resolve_mut(dst)?, naming)
    }

    /// Declared type name, or `None` when `src` is not a registered record.
    pub fn get_name(&self, src: &dyn Any) -> Option<&'static str> {
        self.entries.get(&src.type_id()).map(|entry| entry.name)
    }
}
