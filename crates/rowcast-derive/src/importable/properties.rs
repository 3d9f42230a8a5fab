// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Property table generation.
//!
//! Generates the `Importable` implementation: one `Property` descriptor per
//! non-skipped field, built from a type-checked setter and the declared
//! type's `FromField` parse hook. For an entity `Person`, expands to:
//!
//! ```rust,ignore
//! const _: () = {
//!     fn __set_name(entity: &mut Person, value: CellValue) -> Result<(), CellValue> {
//!         value.downcast::<String>().map(|value| entity.name = *value)
//!     }
//!     fn __parse_name(raw: &str) -> Result<CellValue, FieldParseError> {
//!         <String as FromField>::from_field(raw).map(|value| Box::new(value) as CellValue)
//!     }
//!
//!     impl Importable for Person {
//!         const PROPERTIES: &'static [Property<Self>] = &[
//!             Property::new("name", "String", TypeId::of::<String>, __set_name, __parse_name),
//!         ];
//!     }
//! };
//! ```
//!
//! The helpers live inside an anonymous const block so they never leak into
//! the caller's namespace.

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

use super::parse::EntityDef;

/// Generates the `Importable` implementation for the entity.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let entity_name = entity.name();
    let fields = entity.importable_fields();

    let helper_fns = fields.iter().map(|field| {
        let ident = field.name();
        let ty = field.ty();
        let set_fn = format_ident!("__set_{}", ident);
        let parse_fn = format_ident!("__parse_{}", ident);
        quote! {
            fn #set_fn(
                entity: &mut #entity_name,
                value: ::rowcast::CellValue,
            ) -> ::core::result::Result<(), ::rowcast::CellValue> {
                value.downcast::<#ty>().map(|value| entity.#ident = *value)
            }

            fn #parse_fn(
                raw: &str,
            ) -> ::core::result::Result<::rowcast::CellValue, ::rowcast::FieldParseError> {
                <#ty as ::rowcast::FromField>::from_field(raw)
                    .map(|value| ::std::boxed::Box::new(value) as ::rowcast::CellValue)
            }
        }
    });

    let descriptors = fields.iter().map(|field| {
        let ident = field.name();
        let ty = field.ty();
        let name = entity.property_name(field);
        let type_name = type_display(ty);
        let set_fn = format_ident!("__set_{}", ident);
        let parse_fn = format_ident!("__parse_{}", ident);
        quote! {
            ::rowcast::Property::new(
                #name,
                #type_name,
                ::core::any::TypeId::of::<#ty>,
                #set_fn,
                #parse_fn,
            )
        }
    });

    quote! {
        const _: () = {
            #(#helper_fns)*

            impl ::rowcast::Importable for #entity_name {
                const PROPERTIES: &'static [::rowcast::Property<Self>] = &[
                    #(#descriptors),*
                ];
            }
        };
    }
}

/// Declared type as written, without token spacing (`Option<u32>`, not
/// `Option < u32 >`). Used for diagnostics only.
fn type_display(ty: &syn::Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}
