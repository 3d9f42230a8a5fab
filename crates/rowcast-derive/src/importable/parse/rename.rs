// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Case rules for `#[import(rename_all = "...")]`.

use convert_case::{Case, Casing};
use darling::FromMeta;

/// Case rule applied to every field identifier without an explicit
/// `#[import(rename = "...")]`.
///
/// The accepted spellings are the conventional ones: `"lowercase"`,
/// `"UPPERCASE"`, `"camelCase"`, `"PascalCase"`, `"snake_case"`,
/// `"kebab-case"`, and `"SCREAMING_SNAKE_CASE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `field_name` → `field_name` lowercased as-is.
    Lower,
    /// `field_name` → `FIELD_NAME` uppercased as-is.
    Upper,
    /// `field_name` → `fieldName`.
    Camel,
    /// `field_name` → `FieldName`.
    Pascal,
    /// `FieldName` → `field_name`.
    Snake,
    /// `field_name` → `field-name`.
    Kebab,
    /// `field_name` → `FIELD_NAME`.
    ScreamingSnake,
}

impl RenameRule {
    /// Applies the rule to a field identifier.
    pub fn apply(self, ident: &str) -> String {
        match self {
            Self::Lower => ident.to_lowercase(),
            Self::Upper => ident.to_uppercase(),
            Self::Camel => ident.to_case(Case::Camel),
            Self::Pascal => ident.to_case(Case::Pascal),
            Self::Snake => ident.to_case(Case::Snake),
            Self::Kebab => ident.to_case(Case::Kebab),
            Self::ScreamingSnake => ident.to_case(Case::Snake).to_uppercase(),
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            other => Err(darling::Error::custom(format!(
                "unknown rename_all value '{other}'"
            ))),
        }
    }
}
