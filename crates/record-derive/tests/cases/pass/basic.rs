// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::{Record, RecordType};

#[derive(Record, Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id:    u64,
    pub name:  String,
    pub email: Option<String>
}

fn main() {
    assert_eq!(User::NAME, "User");
    assert_eq!(User::descriptors().len(), 3);

    let user = User::default();
    assert_eq!(record_derive::get_name(&user), "User");
    assert_eq!(record_derive::fields(&user), ["id", "name", "email"]);
}
