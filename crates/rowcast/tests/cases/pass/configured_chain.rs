// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

use rowcast::prelude::*;
use rowcast::Importable;

#[derive(Debug, Default, Importable)]
pub struct Order {
    pub item: String,
    pub quantity: u32,
    pub discount: Option<f64>,
}

fn main() {
    let order: Order = ImportObject::from_fields([
        ("article", "bolts"),
        ("qty", "12"),
        ("internal", "x"),
    ])
    .with_configuration()
    .with_required_field(["article"])
    .with_skipped_field(["internal"])
    .with_property_alias(OrderProperties::ITEM, "article")
    .with_property_aliases(OrderProperties::QUANTITY, ["qty", "pieces"])
    .with_field_value_converter("qty", |raw: &str| raw.trim().parse().unwrap_or(0_u32))
    .with_default(OrderProperties::DISCOUNT, Some(0.1))
    .with_object_factory(Order::default)
    .create_object()
    .unwrap();

    assert_eq!(order.item, "bolts");
    assert_eq!(order.quantity, 12);
    assert_eq!(order.discount, Some(0.1));
}
