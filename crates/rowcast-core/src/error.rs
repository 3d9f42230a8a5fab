// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Conversion failure taxonomy.
//!
//! Every failure is fatal for the current conversion:
//! [`create_object`](crate::ImportObject::create_object) either returns a
//! fully populated entity or one of these errors, never a partial result.
//! There are no retries; the caller re-attempts with corrected input.

use crate::field::FieldParseError;

/// Error returned by [`create_object`](crate::ImportObject::create_object).
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ImportError {
    /// A field registered as required is absent from the import data.
    #[error("the field '{0}' is required")]
    RequiredFieldMissing(String),

    /// A field name resolved (directly or through an alias) to a property
    /// that does not exist on the target entity.
    #[error("invalid property name '{0}'")]
    UnknownProperty(String),

    /// The selected converter failed on the raw value, or its output did not
    /// match the property's declared type.
    #[error("cannot convert field '{field}' value '{value}' to {target}")]
    ConversionFailure {
        /// Field name in the import data.
        field: String,
        /// Raw value that failed to convert.
        value: String,
        /// Declared type of the target property.
        target: &'static str,
        /// Underlying parse failure.
        #[source]
        source: FieldParseError,
    },

    /// The same alias name was registered for two different properties.
    #[error("alias '{0}' is already registered for another property")]
    DuplicateAlias(String),
}
