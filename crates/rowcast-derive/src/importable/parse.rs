// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Importable derive macro.
//!
//! Entity-level attributes like `#[import(rename_all = "camelCase")]` are
//! parsed with [`darling`]'s `FromDeriveInput`, which validates attribute
//! shape and produces spanned errors. Field-level attributes
//! (`#[import(rename = "...")]`, `#[import(skip)]`) are parsed manually from
//! the nested meta list.
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident: Ident                  (struct name, e.g., "Person")
//! ├── vis: Visibility               (pub, pub(crate), etc.)
//! ├── rename_all: Option<RenameRule>
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident          (field name)
//!         ├── ty: Type              (field type)
//!         ├── rename: Option<String>
//!         └── skip: bool            (#[import(skip)] present)
//! ```

mod entity;
mod field;
mod rename;

pub use entity::EntityDef;
pub use field::FieldDef;
pub use rename::RenameRule;
