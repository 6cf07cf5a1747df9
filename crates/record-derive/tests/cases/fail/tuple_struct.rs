// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

#[derive(Record)]
pub struct Pair(u64, String);

fn main() {}
