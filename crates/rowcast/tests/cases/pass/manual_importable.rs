// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! The derive is convenience only: the runtime contract can be implemented
//! by hand.

use std::any::TypeId;

use rowcast::prelude::*;

#[derive(Debug, Default)]
pub struct Flag {
    pub name: String,
    pub enabled: bool,
}

fn set_name(entity: &mut Flag, value: CellValue) -> Result<(), CellValue> {
    value.downcast::<String>().map(|value| entity.name = *value)
}

fn parse_name(raw: &str) -> Result<CellValue, FieldParseError> {
    String::from_field(raw).map(|value| Box::new(value) as CellValue)
}

fn set_enabled(entity: &mut Flag, value: CellValue) -> Result<(), CellValue> {
    value.downcast::<bool>().map(|value| entity.enabled = *value)
}

fn parse_enabled(raw: &str) -> Result<CellValue, FieldParseError> {
    bool::from_field(raw).map(|value| Box::new(value) as CellValue)
}

impl Importable for Flag {
    const PROPERTIES: &'static [Property<Self>] = &[
        Property::new("name", "String", TypeId::of::<String>, set_name, parse_name),
        Property::new("enabled", "bool", TypeId::of::<bool>, set_enabled, parse_enabled),
    ];
}

const ENABLED: PropertyRef<Flag, bool> = PropertyRef::new("enabled");

fn main() {
    let flag: Flag = ImportObject::from_fields([("name", "beta")])
        .with_configuration()
        .with_default(ENABLED, true)
        .create_object()
        .unwrap();

    assert_eq!(flag.name, "beta");
    assert!(flag.enabled);
}
