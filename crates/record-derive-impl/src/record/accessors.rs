// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Record` impl generation.
//!
//! Each accessor is a `match` on the field name. Readers and `field_eq`
//! cover every described field; writers (`assign_field`, `set_field`) cover only the
//! writable ones, so read-only and unknown names fall through to the same
//! refusal arm.

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    bounded_generics,
    parse::{FieldDef, RecordDef}
};

/// Generate the `Record` impl.
pub fn generate(record: &RecordDef) -> TokenStream {
    let krate = &record.krate;
    let ident = &record.ident;
    let generics = bounded_generics(record);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let described: Vec<&FieldDef> = record.described_fields().collect();
    let writable: Vec<&FieldDef> = record.writable_fields().collect();

    let field_any = generate_field_any(&described);
    let field_value = generate_field_value(&described, krate);
    let field_eq = generate_field_eq(&described);
    let assign_field = generate_assign_field(&writable);
    let set_field = generate_set_field(&writable, krate);

    quote! {
        impl #impl_generics #krate::Record for #ident #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                <Self as #krate::RecordType>::NAME
            }

            fn field_descriptors(&self) -> ::std::vec::Vec<#krate::FieldDescriptor> {
                <Self as #krate::RecordType>::descriptors()
            }

            #field_any
            #field_value
            #field_eq
            #assign_field
            #set_field
        }
    }
}

fn generate_field_any(fields: &[&FieldDef]) -> TokenStream {
    let arms = fields.iter().map(|f| {
        let ident = &f.ident;
        let name = f.name_str();
        quote! { #name => ::core::option::Option::Some(&self.#ident), }
    });

    quote! {
        fn field_any(&self, name: &str) -> ::core::option::Option<&dyn ::core::any::Any> {
            match name {
                #(#arms)*
                _ => ::core::option::Option::None
            }
        }
    }
}

fn generate_field_value(fields: &[&FieldDef], krate: &syn::Path) -> TokenStream {
    let arms = fields.iter().map(|f| {
        let ident = &f.ident;
        let name = f.name_str();
        quote! {
            #name => ::core::option::Option::Some(#krate::FieldValue::to_value(&self.#ident)),
        }
    });

    quote! {
        fn field_value(&self, name: &str) -> ::core::option::Option<#krate::Value> {
            match name {
                #(#arms)*
                _ => ::core::option::Option::None
            }
        }
    }
}

fn generate_field_eq(fields: &[&FieldDef]) -> TokenStream {
    let arms = fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let name = f.name_str();
        quote! {
            #name => other
                .downcast_ref::<#ty>()
                .map(|theirs| ::core::cmp::PartialEq::eq(&self.#ident, theirs)),
        }
    });

    quote! {
        fn field_eq(
            &self,
            name: &str,
            other: &dyn ::core::any::Any
        ) -> ::core::option::Option<bool> {
            let _ = other;
            match name {
                #(#arms)*
                _ => ::core::option::Option::None
            }
        }
    }
}

fn generate_assign_field(fields: &[&FieldDef]) -> TokenStream {
    let arms = fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let name = f.name_str();
        quote! {
            #name => match src.downcast_ref::<#ty>() {
                ::core::option::Option::Some(value) => {
                    self.#ident = ::core::clone::Clone::clone(value);
                    true
                }
                ::core::option::Option::None => false
            },
        }
    });

    quote! {
        fn assign_field(&mut self, name: &str, src: &dyn ::core::any::Any) -> bool {
            let _ = src;
            match name {
                #(#arms)*
                _ => false
            }
        }
    }
}

fn generate_set_field(fields: &[&FieldDef], krate: &syn::Path) -> TokenStream {
    let arms = fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let name = f.name_str();
        quote! {
            #name => {
                self.#ident = #krate::convert::<#ty>(#name, value)?;
                ::core::result::Result::Ok(true)
            }
        }
    });

    quote! {
        fn set_field(
            &mut self,
            name: &str,
            value: #krate::Value
        ) -> ::core::result::Result<bool, #krate::MapperError> {
            let _ = &value;
            match name {
                #(#arms)*
                _ => ::core::result::Result::Ok(false)
            }
        }
    }
}
