// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Typed selector companion generation.
//!
//! Generates a `{Entity}Properties` struct with one `PropertyRef` constant
//! per non-skipped field, named in `SCREAMING_SNAKE` after the field. The
//! constants are what configuration calls take, so a misspelled property or
//! a converter of the wrong type fails to compile:
//!
//! ```rust,ignore
//! pub struct PersonProperties;
//!
//! impl PersonProperties {
//!     pub const NAME: PropertyRef<Person, String> = PropertyRef::new("name");
//!     pub const AGE: PropertyRef<Person, Option<u32>> = PropertyRef::new("age");
//! }
//! ```

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::EntityDef;

/// Generates the `{Entity}Properties` companion struct.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let entity_name = entity.name();
    let vis = &entity.vis;
    let companion = entity.ident_with("", "Properties");
    let fields = entity.importable_fields();

    let consts = fields.iter().map(|field| {
        let ident = field.name();
        let ty = field.ty();
        let name = entity.property_name(field);
        // Field identifiers are snake_case, so the constant is just the
        // uppercased identifier.
        let const_ident = format_ident!("{}", ident.to_string().to_uppercase());
        let doc = format!("Selector for [`{entity_name}::{ident}`].");
        quote! {
            #[doc = #doc]
            #vis const #const_ident: ::rowcast::PropertyRef<#entity_name, #ty> =
                ::rowcast::PropertyRef::new(#name);
        }
    });

    let doc = format!("Typed property selectors for [`{entity_name}`].");

    quote! {
        #[doc = #doc]
        #vis struct #companion;

        impl #companion {
            #(#consts)*
        }
    }
}
