// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing of `#[derive(Record)]` input.
//!
//! ```text
//! parse.rs (coordinator)
//! ├── attrs.rs  - struct-level #[record(name, crate)] via darling
//! └── field.rs  - field-level #[record(column, tag, readonly, skip)]
//! ```

mod attrs;
mod field;

use darling::FromDeriveInput;
pub use field::FieldDef;
use syn::{DeriveInput, Generics, Ident};

use self::attrs::RecordAttrs;

/// Parsed record definition handed to the generators.
#[derive(Debug)]
pub struct RecordDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Generic parameters.
    pub generics: Generics,

    /// Declared name from `#[record(name = "...")]`.
    pub name: Option<String>,

    /// Runtime crate path used in generated code.
    pub krate: syn::Path,

    /// All named fields in declaration order, skipped ones included.
    pub fields: Vec<FieldDef>
}

impl RecordDef {
    /// Parse a record definition.
    ///
    /// Every field error is collected so that one expansion reports all of
    /// them.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple struct, or unit struct
    /// - Invalid `#[record(...)]` options on the struct or a field
    /// - An empty `name`
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;
        if attrs.name.as_deref() == Some("") {
            return Err(darling::Error::custom("record name must not be empty")
                .with_span(&input.ident));
        }

        let syn::Data::Struct(data) = &input.data else {
            return Err(darling::Error::custom("Record can only be derived for structs")
                .with_span(&input.ident));
        };
        let syn::Fields::Named(named) = &data.fields else {
            return Err(darling::Error::custom("Record requires named fields")
                .with_span(&input.ident));
        };

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = named
            .named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .collect();
        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            name: attrs.name,
            krate: attrs.krate,
            fields
        })
    }

    /// Record name as exposed through `RecordType::NAME`.
    ///
    /// The struct identifier unless `#[record(name = "...")]` overrides it.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.ident.to_string())
    }

    /// Fields that take part in the record, in declaration order.
    pub fn described_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_described())
    }

    /// Described fields that mapping may write.
    pub fn writable_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.described_fields().filter(|f| f.is_writable())
    }
}
