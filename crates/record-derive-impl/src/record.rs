// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! record.rs (orchestrator)
//! │
//! ├── parse/          → Attribute parsing (RecordDef, FieldDef)
//! │
//! ├── descriptors.rs  → impl RecordType (NAME, descriptors)
//! └── accessors.rs    → impl Record (field access by name)
//! ```
//!
//! # Generated Code
//!
//! For a record like:
//!
//! ```rust,ignore
//! #[derive(Record)]
//! pub struct User {
//!     pub id: u64,
//!     #[record(column = "user_name")]
//!     pub name: String,
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl RecordType for User` | Name and field descriptors |
//! | `impl Record for User` | Typed and dynamic field access by name |
//!
//! Every described field type must implement `FieldValue`; the bound is
//! placed on the impls so that a wrong field type is reported there.

mod accessors;
mod descriptors;
pub mod parse;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Generics, parse_macro_input, parse_quote};

use self::parse::RecordDef;

/// Main entry point for the Record derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate(&record).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(record: &RecordDef) -> TokenStream2 {
    let descriptors = descriptors::generate(record);
    let accessors = accessors::generate(record);

    quote! {
        #descriptors
        #accessors
    }
}

/// Generics of the record with the bounds every impl needs.
///
/// Adds `Self: 'static` and `FieldValue` for each described field type.
fn bounded_generics(record: &RecordDef) -> Generics {
    let krate = &record.krate;
    let mut generics = record.generics.clone();
    let where_clause = generics.make_where_clause();
    where_clause.predicates.push(parse_quote!(Self: 'static));
    for field in record.described_fields() {
        let ty = &field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#ty: #krate::FieldValue));
    }
    generics
}
