// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and runtime for record-derive.
//!
//! This crate provides the traits that `#[derive(Record)]` implements and the
//! operations that work on any record through them. It can also be used
//! standalone with manual [`Record`] implementations.
//!
//! # Overview
//!
//! - [`Record`] / [`RecordType`]: Field descriptors and accessors
//! - [`FieldDescriptor`]: Name, type identity, tag, writability
//! - [`Value`] / [`FieldValue`]: Typed values for dictionary interchange
//! - [`NamingStrategy`]: Field name to storage column conversion
//! - [`mapper`]: `assign`, `diff`, `fields`, `fields_diff`, dictionary
//!   mapping
//! - [`RecordRegistry`]: The same operations over `dyn Any`
//! - [`text`]: String helpers
//! - [`password`]: bcrypt hashing (feature `password`, on by default)
//! - [`json`]: `serde_json` interop (feature `json`)
//! - `FieldValue` for `uuid::Uuid` (feature `uuid`) and `chrono` dates and
//!   timestamps (feature `chrono`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use record_core::prelude::*;
//!
//! let changed = fields_diff_of::<UpdateUserRequest>(&stored, &incoming)?;
//! let rest = map_from_dict_using_namer(row, &mut user, &SnakeCaseNamer::new())?;
//! ```
//!
//! # Logging
//!
//! Operations emit `tracing` events at `debug` (one summary per call) and
//! `trace` (every skipped field). No subscriber is installed by this crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod mapper;
mod naming;
pub mod prelude;
mod record;
mod registry;
pub mod text;
mod value;

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub mod json;

#[cfg(feature = "password")]
#[cfg_attr(docsrs, doc(cfg(feature = "password")))]
pub mod password;

#[cfg(any(feature = "uuid", feature = "chrono"))]
mod interop;

#[cfg(test)]
mod testing;

pub use error::{MapperError, Result};
pub use mapper::{
    Diff, assign, column_name, diff, fields, fields_diff, fields_diff_of, fields_of, get_name,
    map_from_dict, map_from_dict_using_namer
};
pub use naming::{NamingStrategy, SnakeCaseNamer};
pub use record::{FieldDescriptor, Record, RecordType};
pub use registry::RecordRegistry;
pub use value::{Dict, FieldValue, Value, ValueKind, convert};
