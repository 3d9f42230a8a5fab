// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! FromField derive macro implementation.
//!
//! Two shapes are supported:
//!
//! - **unit-variant enums** — the raw value is matched against the variant
//!   names, case-sensitively; no match yields `FieldParseError::UnknownVariant`
//! - **single-field structs** (named or tuple) — parsing delegates to the
//!   inner type's `FromField` implementation and wraps the result
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(FromField)]
//! enum Color { Red, Green }
//!
//! #[derive(FromField)]
//! struct Tag(String);
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Main entry point for the FromField derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Generate the implementation for an enum or a wrapper struct.
fn generate(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "FromField does not support generic types",
        ));
    }

    match &input.data {
        syn::Data::Enum(data) => generate_enum(input, data),
        syn::Data::Struct(data) => generate_wrapper(input, data),
        syn::Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "FromField cannot be derived for unions",
        )),
    }
}

/// Case-sensitive variant-name parsing for unit-variant enums.
fn generate_enum(input: &DeriveInput, data: &syn::DataEnum) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    for variant in &data.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "FromField enums must have unit variants only",
            ));
        }
    }

    let arms = data.variants.iter().map(|variant| {
        let ident = &variant.ident;
        let text = ident.to_string();
        quote! { #text => ::core::result::Result::Ok(Self::#ident), }
    });

    Ok(quote! {
        impl ::rowcast::FromField for #name {
            fn from_field(raw: &str) -> ::core::result::Result<Self, ::rowcast::FieldParseError> {
                match raw {
                    #(#arms)*
                    other => ::core::result::Result::Err(
                        ::rowcast::FieldParseError::UnknownVariant(other.to_owned()),
                    ),
                }
            }
        }
    })
}

/// Delegation to the single field's type for wrapper structs.
fn generate_wrapper(input: &DeriveInput, data: &syn::DataStruct) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let mut fields = data.fields.iter();
    let (Some(field), None) = (fields.next(), fields.next()) else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "FromField structs must have exactly one field",
        ));
    };

    let ty = &field.ty;
    let wrap = match &field.ident {
        Some(ident) => quote! { Self { #ident: value } },
        None => quote! { Self(value) },
    };

    Ok(quote! {
        impl ::rowcast::FromField for #name {
            fn from_field(raw: &str) -> ::core::result::Result<Self, ::rowcast::FieldParseError> {
                <#ty as ::rowcast::FromField>::from_field(raw).map(|value| #wrap)
            }
        }
    })
}
