// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | struct identifier | Value of `RecordType::NAME` |
//! | `crate` | No | `::record_core` | Path to the runtime crate |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Default path to the runtime crate in generated code.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::record_core)
}

/// Struct-level attributes parsed from `#[record(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Record)]
/// #[record(name = "users.User", crate = "::record_derive")]
/// pub struct User { /* ... */ }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Generic parameters, passed through to the impls.
    pub generics: Generics,

    /// Declared name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Runtime crate path.
    #[darling(rename = "crate", default = "default_crate_path")]
    pub krate: syn::Path
}
