// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `RecordType` impl generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::record_core::RecordType for User {
//!     const NAME: &'static str = "User";
//!
//!     fn descriptors() -> Vec<::record_core::FieldDescriptor> {
//!         vec![
//!             ::record_core::FieldDescriptor::new::<u64>(0usize, "id"),
//!             ::record_core::FieldDescriptor::new::<String>(1usize, "name")
//!                 .with_tag("column:user_name"),
//!             ::record_core::FieldDescriptor::new::<u32>(2usize, "revision").read_only(),
//!         ]
//!     }
//! }
//! ```
//!
//! Indices count described fields only, so skipped fields leave no gaps.

use proc_macro2::TokenStream;
use quote::quote;

use super::{bounded_generics, parse::RecordDef};

/// Generate the `RecordType` impl.
pub fn generate(record: &RecordDef) -> TokenStream {
    let krate = &record.krate;
    let ident = &record.ident;
    let name = record.name_str();
    let generics = bounded_generics(record);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let descriptors = record.described_fields().enumerate().map(|(index, field)| {
        let ty = &field.ty;
        let field_name = field.name_str();
        let tag = field
            .config
            .tag_string()
            .map(|tag| quote! { .with_tag(#tag) });
        let read_only = (!field.is_writable()).then(|| quote! { .read_only() });

        quote! {
            #krate::FieldDescriptor::new::<#ty>(#index, #field_name) #tag #read_only
        }
    });

    quote! {
        impl #impl_generics #krate::RecordType for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;

            fn descriptors() -> ::std::vec::Vec<#krate::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }
        }
    }
}
