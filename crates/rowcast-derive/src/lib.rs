// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Internal proc-macro implementation for rowcast. Use the `rowcast` crate
//! instead, which re-exports both macros next to the runtime types they
//! generate code for.
//!
//! # Attribute Quick Reference
//!
//! ## Entity-Level `#[import(...)]`
//!
//! ```rust,ignore
//! #[derive(Importable)]
//! #[import(rename_all = "camelCase")] // Optional: case rule for field names
//! pub struct Person { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct Person {
//!     pub name: String,
//!
//!     #[import(rename = "years")]     // Canonical property name override
//!     pub age: u32,
//!
//!     #[import(skip)]                 // Not settable from import data
//!     pub secret: Vec<u8>,
//! }
//! ```

mod from_field;
mod importable;

use proc_macro::TokenStream;

/// Derive macro generating the `Importable` property table and the
/// `{Entity}Properties` selector companion for a named struct.
///
/// Every non-skipped field type must implement `FromField`; the table entry
/// built for it carries the declared type's default conversion and a
/// type-checked setter. See the crate docs for the attribute surface.
#[proc_macro_derive(Importable, attributes(import))]
pub fn derive_importable(input: TokenStream) -> TokenStream {
    importable::derive(input)
}

/// Derive macro implementing `FromField` for unit-variant enums and
/// single-field wrapper structs.
///
/// Enum parsing matches variant names case-sensitively; wrappers delegate to
/// the inner type's `FromField` implementation.
#[proc_macro_derive(FromField)]
pub fn derive_from_field(input: TokenStream) -> TokenStream {
    from_field::derive(input)
}
