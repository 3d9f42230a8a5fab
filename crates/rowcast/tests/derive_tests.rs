// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Derive surface: renames, skips, selector constants, and the generated
//! `FromField` implementations.

use rowcast::prelude::*;
use rowcast::{FromField, Importable};

#[derive(Debug, Default, Importable)]
#[import(rename_all = "camelCase")]
struct Person {
    first_name: String,
    #[import(rename = "years")]
    age: u32,
    #[import(skip)]
    secret: Vec<u8>,
}

#[test]
fn rename_all_maps_field_names() {
    let person: Person = ImportObject::from_fields([("firstName", "Ada")])
        .create_object()
        .unwrap();
    assert_eq!(person.first_name, "Ada");

    let err = ImportObject::<Person>::from_fields([("first_name", "Ada")])
        .create_object()
        .unwrap_err();
    assert_eq!(err, ImportError::UnknownProperty("first_name".into()));
}

#[test]
fn explicit_rename_wins_over_rename_all() {
    let person: Person = ImportObject::from_fields([("years", "36")])
        .create_object()
        .unwrap();
    assert_eq!(person.age, 36);

    let err = ImportObject::<Person>::from_fields([("age", "36")])
        .create_object()
        .unwrap_err();
    assert_eq!(err, ImportError::UnknownProperty("age".into()));
}

#[test]
fn skipped_fields_are_not_properties() {
    let err = ImportObject::<Person>::from_fields([("secret", "boo")])
        .create_object()
        .unwrap_err();
    assert_eq!(err, ImportError::UnknownProperty("secret".into()));

    let person: Person = ImportObject::from_fields([("firstName", "Ada")])
        .create_object()
        .unwrap();
    assert!(person.secret.is_empty());
}

#[test]
fn selector_constants_carry_the_canonical_names() {
    assert_eq!(PersonProperties::FIRST_NAME.name(), "firstName");
    assert_eq!(PersonProperties::AGE.name(), "years");
}

#[test]
fn selectors_register_against_the_canonical_name() {
    let person: Person = ImportObject::from_fields([("fn", "Ada")])
        .with_configuration()
        .with_property_alias(PersonProperties::FIRST_NAME, "fn")
        .create_object()
        .unwrap();
    assert_eq!(person.first_name, "Ada");
}

#[test]
fn property_table_reflects_the_struct() {
    let property = Person::property("years").unwrap();
    assert!(property.is::<u32>());
    assert_eq!(property.type_name(), "u32");
    assert!(Person::property("secret").is_none());
    assert_eq!(Person::PROPERTIES.len(), 2);
}

mod from_field_derives {
    use super::*;

    #[derive(Debug, PartialEq, FromField)]
    enum Color {
        Red,
        DarkGreen,
    }

    #[derive(Debug, PartialEq, FromField)]
    struct Tag(String);

    #[derive(Debug, PartialEq, FromField)]
    struct Threshold {
        millis: u64,
    }

    #[test]
    fn enum_parsing_matches_variant_names() {
        assert_eq!(Color::from_field("Red").unwrap(), Color::Red);
        assert_eq!(Color::from_field("DarkGreen").unwrap(), Color::DarkGreen);
    }

    #[test]
    fn enum_parsing_is_case_sensitive() {
        assert_eq!(
            Color::from_field("red").unwrap_err(),
            FieldParseError::UnknownVariant("red".into())
        );
    }

    #[test]
    fn tuple_wrapper_delegates_to_the_inner_type() {
        assert_eq!(Tag::from_field("beta").unwrap(), Tag("beta".into()));
    }

    #[test]
    fn named_wrapper_delegates_to_the_inner_type() {
        assert_eq!(
            Threshold::from_field("250").unwrap(),
            Threshold { millis: 250 }
        );
        assert!(Threshold::from_field("fast").is_err());
    }

    #[test]
    fn wrappers_compose_with_option() {
        assert_eq!(Option::<Tag>::from_field("").unwrap(), None);
        assert_eq!(
            Option::<Tag>::from_field("beta").unwrap(),
            Some(Tag("beta".into()))
        );
    }
}

mod feature_types {
    use super::*;

    #[derive(Debug, Default, Importable)]
    struct AuditRow {
        id: uuid::Uuid,
        seen_at: Option<chrono::DateTime<chrono::Utc>>,
        day: Option<chrono::NaiveDate>,
    }

    #[test]
    fn uuid_and_chrono_fields_parse() {
        let row: AuditRow = ImportObject::from_fields([
            ("id", "67e55044-10b1-426f-9247-bb680e5fe0c8"),
            ("seen_at", "2026-01-02T03:04:05Z"),
            ("day", "2026-01-02"),
        ])
        .create_object()
        .unwrap();

        assert_eq!(row.id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(row.seen_at.unwrap().to_rfc3339(), "2026-01-02T03:04:05+00:00");
        assert_eq!(row.day.unwrap().to_string(), "2026-01-02");
        assert_eq!(AuditRowProperties::SEEN_AT.name(), "seen_at");
    }

    #[test]
    fn empty_timestamp_is_absent() {
        let row: AuditRow = ImportObject::from_fields([("seen_at", "")])
            .create_object()
            .unwrap();
        assert_eq!(row.seen_at, None);
    }
}
