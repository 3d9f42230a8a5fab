// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

use rowcast::prelude::*;
use rowcast::Importable;

#[derive(Debug, Default, Importable)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub nickname: Option<String>,
}

fn main() {
    let person: Person = ImportObject::from_fields([
        ("name", "Ada"),
        ("age", "36"),
        ("nickname", ""),
    ])
    .create_object()
    .unwrap();

    assert_eq!(person.name, "Ada");
    assert_eq!(person.age, 36);
    assert_eq!(person.nickname, None);
}
