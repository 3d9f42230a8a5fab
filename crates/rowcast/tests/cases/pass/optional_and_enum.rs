// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

use rowcast::prelude::*;
use rowcast::{FromField, Importable};

#[derive(Debug, Default, PartialEq, FromField)]
pub enum Phase {
    #[default]
    Solid,
    Liquid,
    Gas,
}

#[derive(Debug, Default, Importable)]
pub struct Probe {
    pub phase: Phase,
    pub pressure: Option<f64>,
}

fn main() {
    let probe: Probe = ImportObject::from_fields([("phase", "Liquid"), ("pressure", "")])
        .create_object()
        .unwrap();
    assert_eq!(probe.phase, Phase::Liquid);
    assert_eq!(probe.pressure, None);

    let err = ImportObject::<Probe>::from_fields([("phase", "plasma")])
        .create_object()
        .unwrap_err();
    assert!(matches!(err, ImportError::ConversionFailure { .. }));
}
