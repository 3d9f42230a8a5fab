// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing.
//!
//! This module handles parsing of entity-level attributes using darling,
//! and provides the main [`EntityDef`] structure used by both code
//! generators.

use std::collections::HashSet;

use darling::FromDeriveInput;
use proc_macro2::Span;
use syn::{DeriveInput, Ident, Visibility};

use super::{field::FieldDef, rename::RenameRule};

/// Entity-level attributes parsed from `#[import(...)]`.
///
/// This is an internal struct used by darling for parsing. The public API
/// uses [`EntityDef`], which combines these attributes with parsed field
/// definitions.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(import), supports(struct_named))]
struct EntityAttrs {
    /// Struct identifier (e.g., `Person`).
    ident: Ident,

    /// Struct visibility (e.g., `pub`, `pub(crate)`).
    vis: Visibility,

    /// Case rule applied to every field name without an explicit rename.
    #[darling(default)]
    rename_all: Option<RenameRule>,
}

/// Complete parsed entity definition.
///
/// This is the main data structure passed to both code generators. It
/// contains the entity-level metadata and all field definitions.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier (e.g., `Person`).
    pub ident: Ident,

    /// Struct visibility.
    ///
    /// Propagated to the generated selector companion so it has the same
    /// visibility as the source entity.
    pub vis: Visibility,

    /// Case rule from `#[import(rename_all = "...")]`, if any.
    pub rename_all: Option<RenameRule>,

    /// All field definitions from the struct.
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to a non-struct (enum, union)
    /// - Applied to a tuple struct or unit struct
    /// - Generic entities (property tables are static, one per type)
    /// - Invalid attribute values
    /// - Two fields resolving to the same canonical property name
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        if !input.generics.params.is_empty() {
            return Err(
                darling::Error::custom("Importable does not support generic entities")
                    .with_span(&input.ident),
            );
        }

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Importable requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Importable can only be derived for structs")
                        .with_span(&input.ident),
                );
            }
        };

        let entity = Self {
            ident: attrs.ident,
            vis: attrs.vis,
            rename_all: attrs.rename_all,
            fields,
        };
        entity.check_distinct_property_names()?;
        Ok(entity)
    }

    /// Reject two fields resolving to the same canonical property name,
    /// e.g. through a careless rename.
    fn check_distinct_property_names(&self) -> darling::Result<()> {
        let mut seen = HashSet::new();
        for field in self.importable_fields() {
            let name = self.property_name(field);
            if !seen.insert(name.clone()) {
                return Err(
                    darling::Error::custom(format!("duplicate property name '{name}'"))
                        .with_span(&field.ident),
                );
            }
        }
        Ok(())
    }

    /// Fields that take part in the property table (not `#[import(skip)]`).
    pub fn importable_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|field| !field.skip).collect()
    }

    /// Canonical property name for a field: an explicit rename wins, then
    /// the `rename_all` rule, then the identifier itself.
    pub fn property_name(&self, field: &FieldDef) -> String {
        if let Some(rename) = &field.rename {
            return rename.clone();
        }
        let ident = field.ident.to_string();
        match self.rename_all {
            Some(rule) => rule.apply(&ident),
            None => ident,
        }
    }

    /// Get the entity name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Create a new identifier with prefix and/or suffix.
    ///
    /// Used to generate the companion type name following naming
    /// conventions, e.g. `ident_with("", "Properties")` → `PersonProperties`.
    pub fn ident_with(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(
            &format!("{}{}{}", prefix, self.ident, suffix),
            Span::call_site(),
        )
    }
}
