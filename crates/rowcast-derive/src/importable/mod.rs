// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Importable derive macro implementation.
//!
//! This module contains all code generation logic for the
//! `#[derive(Importable)]` macro. It orchestrates the parsing of entity
//! definitions and delegates code generation to specialized submodules.
//!
//! # Architecture
//!
//! ```text
//! importable/ (orchestrator)
//! │
//! ├── parse/          → Attribute parsing (EntityDef, FieldDef, RenameRule)
//! │
//! ├── properties.rs   → `impl Importable` with the static property table
//! └── selectors.rs    → `{Entity}Properties` typed selector companion
//! ```
//!
//! # Generated Code
//!
//! For an entity like:
//!
//! ```rust,ignore
//! #[derive(Importable)]
//! pub struct Person {
//!     pub name: String,
//!     pub age: Option<u32>,
//! }
//! ```
//!
//! the macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl Importable for Person` | Property table driving the conversion engine |
//! | `PersonProperties` | `NAME` / `AGE` selector constants for configuration calls |

pub mod parse;

mod properties;
mod selectors;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Importable derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => generate(entity),
        Err(err) => err.write_errors().into(),
    }
}

/// Generate all code for the entity.
fn generate(entity: EntityDef) -> TokenStream {
    let importable_tokens = properties::generate(&entity);
    let selector_tokens = selectors::generate(&entity);

    let expanded = quote! {
        #importable_tokens
        #selector_tokens
    };

    expanded.into()
}
