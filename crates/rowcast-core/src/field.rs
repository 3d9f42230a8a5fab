// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Default string-to-value conversion.
//!
//! [`FromField`] is the fallback used when no field, property, or type
//! converter is registered for a property:
//!
//! - `String` takes the raw value verbatim
//! - `Option<U>` treats the empty string as "no value" and otherwise defers
//!   to `U`
//! - numeric primitives, `bool` and `char` parse through [`FromStr`]
//! - enums and single-field wrapper structs get an implementation from
//!   `#[derive(FromField)]` in the `rowcast` crate
//!
//! Feature-gated implementations cover `uuid::Uuid` (feature `uuid`) and
//! `chrono::DateTime<Utc>` / `chrono::NaiveDate` (feature `chrono`).
//!
//! [`FromStr`]: std::str::FromStr

/// Failure of a single value conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldParseError {
    /// The raw text is not parsable as the target type.
    #[error("{0}")]
    Invalid(String),

    /// No enum variant with the given name.
    #[error("no variant named '{0}'")]
    UnknownVariant(String),

    /// A converted value did not match the property's declared type.
    #[error("converter output does not match the property type")]
    TypeMismatch,
}

/// Conversion from a raw import-data value to a typed property value.
///
/// Every property type of an [`Importable`](crate::Importable) entity must
/// implement this trait; it is what the engine falls back to when no
/// converter is registered for the field, the property, or the type. For
/// enums and newtype wrappers, derive it; for other custom types implement
/// it by hand:
///
/// ```rust
/// use rowcast_core::{FieldParseError, FromField};
///
/// struct Percent(f64);
///
/// impl FromField for Percent {
///     fn from_field(raw: &str) -> Result<Self, FieldParseError> {
///         let digits = raw.trim_end_matches('%');
///         f64::from_field(digits).map(Percent)
///     }
/// }
/// ```
pub trait FromField: Sized {
    /// Parse a raw field value.
    fn from_field(raw: &str) -> Result<Self, FieldParseError>;
}

impl FromField for String {
    fn from_field(raw: &str) -> Result<Self, FieldParseError> {
        Ok(raw.to_owned())
    }
}

/// The empty string counts as "no value"; anything else must parse as `U`.
impl<U: FromField> FromField for Option<U> {
    fn from_field(raw: &str) -> Result<Self, FieldParseError> {
        if raw.is_empty() {
            Ok(None)
        } else {
            U::from_field(raw).map(Some)
        }
    }
}

macro_rules! from_field_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromField for $ty {
                fn from_field(raw: &str) -> Result<Self, FieldParseError> {
                    raw.parse::<$ty>()
                        .map_err(|err| FieldParseError::Invalid(err.to_string()))
                }
            }
        )*
    };
}

from_field_via_from_str!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
impl FromField for uuid::Uuid {
    fn from_field(raw: &str) -> Result<Self, FieldParseError> {
        raw.parse::<uuid::Uuid>()
            .map_err(|err| FieldParseError::Invalid(err.to_string()))
    }
}

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl FromField for chrono::DateTime<chrono::Utc> {
    /// Parses an RFC 3339 timestamp.
    fn from_field(raw: &str) -> Result<Self, FieldParseError> {
        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|stamp| stamp.with_timezone(&chrono::Utc))
            .map_err(|err| FieldParseError::Invalid(err.to_string()))
    }
}

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl FromField for chrono::NaiveDate {
    fn from_field(raw: &str) -> Result<Self, FieldParseError> {
        raw.parse::<chrono::NaiveDate>()
            .map_err(|err| FieldParseError::Invalid(err.to_string()))
    }
}
