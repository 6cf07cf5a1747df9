// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

#[derive(Record)]
#[record(crate = "::record_derive")]
pub struct Note {
    pub r#type: String,
    pub body:   String
}

fn main() {
    let note = Note {
        r#type: "memo".to_owned(),
        body:   String::new()
    };
    assert_eq!(record_derive::fields(&note), ["type", "body"]);
}
