// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

pub struct Opaque;

#[derive(Record)]
pub struct Holder {
    pub id:    u64,
    pub inner: Opaque
}

fn main() {}
