// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Internal proc-macro implementation for `record-derive`.
//!
//! Use the `record-derive` crate instead; it re-exports this macro together
//! with the runtime it expands against.
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(Record)]
//! #[record(
//!     name = "users.User",             // Optional: declared name (default: struct ident)
//!     crate = "::record_derive"        // Optional: runtime path (default: ::record_core)
//! )]
//! pub struct User {
//!     pub id: u64,
//!
//!     #[record(column = "user_name")]  // Storage column override
//!     pub name: String,
//!
//!     #[record(tag = "size:64")]       // Raw descriptor tag
//!     pub email: Option<String>,
//!
//!     #[record(readonly)]              // Described, never written by mapping
//!     pub revision: u32,
//!
//!     #[record(skip)]                  // Not part of the record
//!     pub cache: Vec<u8>,
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod record;

use proc_macro::TokenStream;

/// Derive `RecordType` and `Record` for a struct with named fields.
///
/// # Generated Impls
///
/// | Impl | Provides |
/// |------|----------|
/// | `RecordType` | `NAME` and `descriptors()` |
/// | `Record` | `record_name`, `field_descriptors`, `field_any`, `field_value`, `field_eq`, `assign_field`, `set_field` |
///
/// # Struct Attributes
///
/// | Attribute | Default | Description |
/// |-----------|---------|-------------|
/// | `name = "..."` | struct identifier | Value of `RecordType::NAME` |
/// | `crate = "path"` | `::record_core` | Runtime crate path in generated code |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[record(column = "name")]` | Storage column, stored as tag entry `column:name` |
/// | `#[record(tag = "k:v,...")]` | Raw tag, appended after `column` |
/// | `#[record(readonly)]` | Excluded from `assign_field` / `set_field` |
/// | `#[record(skip)]` | Excluded from the record entirely |
///
/// Every field that is not skipped must implement `FieldValue`.
///
/// # Errors
///
/// Compile errors for enums, unions, tuple and unit structs, unknown
/// options, an empty `column` or one containing `,` or `:`, and a column
/// given both through `column` and inside `tag`.
///
/// # Example
///
/// ```rust,ignore
/// use record_derive::{Record, SnakeCaseNamer, map_from_dict_using_namer};
///
/// #[derive(Record, Default)]
/// pub struct Profile {
///     #[record(column = "user_name")]
///     pub name: String,
///     pub bio: Option<String>,
/// }
///
/// let mut profile = Profile::default();
/// let rest = map_from_dict_using_namer(row, &mut profile, &SnakeCaseNamer::new())?;
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
