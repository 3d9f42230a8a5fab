// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! This module handles parsing of `#[import(...)]` field attributes.
//!
//! # Attribute Flags
//!
//! | Field | Attribute | Effect |
//! |-------|-----------|--------|
//! | `rename` | `#[import(rename = "...")]` | Canonical property name override |
//! | `skip` | `#[import(skip)]` | Excluded from the property table |

use syn::{Attribute, Field, Ident, LitStr, Meta, Type, Visibility};

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier (e.g., `name`, `age`).
    pub ident: Ident,

    /// Field type (e.g., `String`, `Option<u32>`).
    pub ty: Type,

    /// Field visibility.
    ///
    /// Preserved for potential future use in generated code.
    #[allow(dead_code)]
    pub vis: Visibility,

    /// Canonical property name override (`#[import(rename = "...")]`).
    pub rename: Option<String>,

    /// Whether the field is excluded from the property table
    /// (`#[import(skip)]`).
    ///
    /// Skipped fields need no `FromField` implementation and get no
    /// selector constant; the engine can never assign them.
    pub skip: bool,
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Panics
    ///
    /// Panics if the field doesn't have an identifier (tuple struct field).
    /// This is caught earlier by darling's `supports(struct_named)`.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().expect("named field required");
        let ty = field.ty.clone();
        let vis = field.vis.clone();

        let mut rename = None;
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("import") {
                parse_import_attr(attr, &mut rename, &mut skip)?;
            }
        }

        Ok(Self {
            ident,
            ty,
            vis,
            rename,
            skip,
        })
    }

    /// Get the field name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the field type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

/// Parse `#[import(rename = "...", skip)]` attribute.
///
/// Unknown identifiers are rejected with a spanned error rather than
/// ignored, so a typo like `#[import(renmae = "x")]` fails the build.
fn parse_import_attr(
    attr: &Attribute,
    rename: &mut Option<String>,
    skip: &mut bool,
) -> darling::Result<()> {
    if let Meta::List(meta_list) = &attr.meta {
        meta_list.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                *skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                *rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown import attribute"))
            }
        })?;
    }
    Ok(())
}
