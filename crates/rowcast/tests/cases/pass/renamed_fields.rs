// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

use rowcast::prelude::*;
use rowcast::Importable;

#[derive(Debug, Default, Importable)]
#[import(rename_all = "kebab-case")]
pub struct Package {
    pub display_name: String,
    #[import(rename = "semver")]
    pub version_req: String,
    #[import(skip)]
    pub resolved: bool,
}

fn main() {
    let package: Package = ImportObject::from_fields([
        ("display-name", "left-pad"),
        ("semver", "^1.0"),
    ])
    .create_object()
    .unwrap();

    assert_eq!(package.display_name, "left-pad");
    assert_eq!(package.version_req, "^1.0");
    assert!(!package.resolved);
    assert_eq!(PackageProperties::DISPLAY_NAME.name(), "display-name");
    assert_eq!(PackageProperties::VERSION_REQ.name(), "semver");
}
