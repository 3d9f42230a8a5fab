// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Core traits and the conversion engine for rowcast.
//!
//! This crate is the runtime half of rowcast: it turns a flat
//! `String -> String` field mapping (a parsed table row, a CSV line, a form
//! payload) into a strongly-typed entity, driven by a fluent configuration
//! surface. It can also be used standalone with hand-written [`Importable`]
//! implementations.
//!
//! # Overview
//!
//! - [`ImportObject`] — wraps one field mapping; terminal operation is
//!   [`create_object`](ImportObject::create_object)
//! - [`ConfiguredImportObject`] — fluent configuration view: aliases, skipped
//!   and required fields, converters at four precedence levels, default
//!   values, object factory
//! - [`Importable`] — per-entity property table, normally generated by
//!   `#[derive(Importable)]` from the `rowcast` crate
//! - [`FromField`] — default string-to-value conversion for property types
//! - [`prelude`] — convenient re-exports
//!
//! # Usage
//!
//! Most users should use the `rowcast` crate directly, which re-exports this
//! crate together with the derive macros:
//!
//! ```rust,ignore
//! use rowcast::prelude::*;
//!
//! #[derive(Debug, Default, Importable)]
//! struct Person {
//!     name: String,
//!     age: Option<u32>,
//! }
//!
//! let person: Person = ImportObject::from_fields([("name", "Ada"), ("age", "36")])
//!     .create_object()?;
//! ```
//!
//! # Converter precedence
//!
//! For every field, the engine picks the first converter found in this fixed
//! order: field-name-keyed, property-name-keyed, property-type-keyed, then
//! the default provider for the property's declared type. See
//! [`ConfiguredImportObject`] for the registration surface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;

mod error;
mod field;
mod import;
mod property;

pub use error::ImportError;
pub use field::{FieldParseError, FromField};
pub use import::{AsImportObject, ConfiguredImportObject, ImportObject};
pub use property::{CellValue, Importable, Property, PropertyRef};
