// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Effect |
//! |-----------|---------|--------|
//! | `column` | `#[record(column = "user_name")]` | Storage column override |
//! | `tag` | `#[record(tag = "size:64")]` | Raw descriptor tag |
//! | `readonly` | `#[record(readonly)]` | Never written by mapping |
//! | `skip` | `#[record(skip)]` | Not described at all |
//!
//! `column = "x"` is stored as the tag entry `column:x`, placed before any
//! entries given with `tag`.

use syn::{Attribute, Field, Ident, LitStr, Meta, Type, ext::IdentExt};

/// Options from one field's `#[record(...)]` attributes.
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    /// Column override, with the span of its literal.
    pub column: Option<LitStr>,

    /// Raw tag, with the span of its literal.
    pub tag: Option<LitStr>,

    /// Field is never written by `assign` or dictionary mapping.
    pub readonly: bool,

    /// Field is left out of the record entirely.
    pub skip: bool
}

impl FieldConfig {
    /// Parse `#[record(...)]` on a field.
    ///
    /// Several attributes on one field accumulate; a later `column` or
    /// `tag` replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Unknown options and non-string values for `column` / `tag`.
    pub fn from_attr(attr: &Attribute, config: &mut Self) -> syn::Result<()> {
        let Meta::List(meta_list) = &attr.meta else {
            return Err(syn::Error::new_spanned(
                attr,
                "expected `#[record(...)]` with options"
            ));
        };

        meta_list.parse_nested_meta(|meta| {
            if meta.path.is_ident("column") {
                config.column = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("tag") {
                config.tag = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("readonly") {
                config.readonly = true;
            } else if meta.path.is_ident("skip") {
                config.skip = true;
            } else {
                return Err(meta.error("expected `column`, `tag`, `readonly`, or `skip`"));
            }
            Ok(())
        })
    }

    /// Combined tag string for the descriptor.
    #[must_use]
    pub fn tag_string(&self) -> Option<String> {
        let column = self.column.as_ref().map(|c| format!("column:{}", c.value()));
        let tag = self.tag.as_ref().map(LitStr::value).filter(|t| !t.is_empty());
        match (column, tag) {
            (Some(column), Some(tag)) => Some(format!("{column},{tag}")),
            (column, tag) => column.or(tag)
        }
    }

    /// Check option combinations that cannot mean anything.
    fn validate(&self, ident: &Ident) -> darling::Result<()> {
        if self.skip && (self.column.is_some() || self.tag.is_some() || self.readonly) {
            return Err(darling::Error::custom(
                "`skip` cannot be combined with other record options"
            )
            .with_span(ident));
        }

        if let Some(column) = &self.column {
            let name = column.value();
            if name.is_empty() {
                return Err(darling::Error::custom("column name must not be empty").with_span(column));
            }
            if name.contains([',', ':']) {
                return Err(darling::Error::custom(
                    "column name must not contain `,` or `:`"
                )
                .with_span(column));
            }
            if let Some(tag) = &self.tag
                && tag_has_column(&tag.value())
            {
                return Err(darling::Error::custom(
                    "column given both as `column = ...` and inside `tag`"
                )
                .with_span(tag));
            }
        }

        Ok(())
    }
}

/// Whether a raw tag carries a non-empty `column:` entry.
fn tag_has_column(tag: &str) -> bool {
    tag.split(',').any(|part| {
        let mut pieces = part.split(':');
        pieces.next() == Some("column") && pieces.next().is_some_and(|value| !value.is_empty())
    })
}

/// Field definition with parsed options.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type,

    /// Record options.
    pub config: FieldConfig
}

impl FieldDef {
    /// Parse a named field.
    ///
    /// # Errors
    ///
    /// Returns error for unnamed fields, malformed `#[record(...)]`
    /// attributes, and conflicting options.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Record fields must be named").with_span(field)
        })?;

        let mut config = FieldConfig::default();
        for attr in &field.attrs {
            if attr.path().is_ident("record") {
                FieldConfig::from_attr(attr, &mut config)?;
            }
        }
        config.validate(&ident)?;

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            config
        })
    }

    /// Field name as written in the struct.
    ///
    /// Raw identifiers lose their `r#` prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Check if the field takes part in the record.
    #[must_use]
    pub fn is_described(&self) -> bool {
        !self.config.skip
    }

    /// Check if mapping may write the field.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        !self.config.readonly
    }
}
