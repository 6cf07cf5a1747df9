// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::{Record, RecordType};

#[derive(Record, Default)]
#[record(name = "accounts.Account")]
pub struct Account {
    #[record(column = "user_name", tag = "size:64")]
    pub name: String,

    #[record(tag = "column:mail")]
    pub email: Option<String>,

    #[record(readonly)]
    pub revision: u32,

    #[record(skip)]
    pub cache: std::cell::Cell<u8>
}

fn main() {
    assert_eq!(Account::NAME, "accounts.Account");

    let fields = Account::descriptors();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].column_override(), Some("user_name"));
    assert_eq!(fields[0].tag_value("size"), Some("64"));
    assert_eq!(fields[1].column_override(), Some("mail"));
    assert!(!fields[2].writable);
}
