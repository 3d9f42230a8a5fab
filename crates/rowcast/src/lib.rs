// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # rowcast
//!
//! One crate, all features. Re-exports:
//! - [`Importable`](macro@Importable) and [`FromField`](macro@FromField)
//!   derive macros from `rowcast-derive`
//! - All types from `rowcast-core` ([`ImportObject`],
//!   [`ConfiguredImportObject`], [`Importable`], [`FromField`],
//!   [`ImportError`], [`prelude`], ...)

// Re-export all core types
pub use rowcast_core::*;
// Re-export derive macros
pub use rowcast_derive::{FromField, Importable};
