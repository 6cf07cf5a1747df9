// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

#[derive(Record)]
pub struct User {
    #[record(column = "user_name", tag = "column:login")]
    pub name: String
}

fn main() {}
