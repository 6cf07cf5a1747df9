// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::{FieldValue, Record, RecordType};

#[derive(Record, Default)]
pub struct Wrapper<T>
where
    T: FieldValue + Default
{
    pub value: T,
    pub label: String
}

fn main() {
    let fields = Wrapper::<u32>::descriptors();
    assert_eq!(fields[0].type_name, "u32");

    let mut dst = Wrapper::<u32>::default();
    let src = Wrapper {
        value: 7u32,
        label: "seven".to_owned()
    };
    assert_eq!(record_derive::assign(&mut dst, &src), 2);
    assert_eq!(dst.value, 7);
}
