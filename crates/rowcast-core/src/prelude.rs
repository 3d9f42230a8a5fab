// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rowcast_core::prelude::*;
//! ```

pub use crate::{
    AsImportObject, CellValue, ConfiguredImportObject, FieldParseError, FromField, ImportError,
    ImportObject, Importable, Property, PropertyRef,
};
